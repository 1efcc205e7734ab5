//! Keyed, cancellable timers.
//!
//! The gatekeeper asks a [`Scheduler`] to fire a [`TimerKey`] after a
//! delay. The host delivers fired keys back through
//! [`Gatekeeper::on_timer`](crate::Gatekeeper::on_timer). Scheduling a key
//! that is already pending replaces it; keys that arrive after their owner
//! moved on are ignored by the gatekeeper.
//!
//! # Implementations
//!
//! - [`ManualScheduler`] - virtual clock advanced by hand (tests)
//! - [`TokioScheduler`] - tokio timers feeding an mpsc channel (feature `tokio`)

use std::fmt;
use std::time::Duration;

use crate::models::{AlertId, SubmissionId};

/// Identity of a scheduled task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Re-enable the submit control if no completion arrived
    Watchdog(SubmissionId),
    /// Auto-dismiss a non-permanent alert
    AlertExpiry(AlertId),
    /// Put an auxiliary button back to its original label
    ButtonRestore { button: String, generation: u64 },
}

impl fmt::Display for TimerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerKey::Watchdog(id) => write!(f, "watchdog({})", id),
            TimerKey::AlertExpiry(id) => write!(f, "alert-expiry({})", id.0),
            TimerKey::ButtonRestore { button, generation } => {
                write!(f, "button-restore({}#{})", button, generation)
            }
        }
    }
}

/// Runs timers on behalf of the gatekeeper.
pub trait Scheduler {
    /// Fires `key` after `after`, replacing any pending timer with the same key.
    fn schedule(&mut self, key: TimerKey, after: Duration);

    /// Drops a pending timer. Unknown keys are ignored.
    fn cancel(&mut self, key: &TimerKey);
}

// =============================================================================
// Manual (virtual clock)
// =============================================================================

#[derive(Debug, Clone)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    key: TimerKey,
}

/// Scheduler driven by an explicit virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    seq: u64,
    pending: Vec<PendingTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward and returns every key that came due,
    /// earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerKey> {
        self.now += by;
        let now = self.now;

        let (mut due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = rest;

        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.key).collect()
    }

    pub fn is_pending(&self, key: &TimerKey) -> bool {
        self.pending.iter().any(|t| &t.key == key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, key: TimerKey, after: Duration) {
        self.cancel(&key);
        self.seq += 1;
        self.pending.push(PendingTimer {
            due: self.now + after,
            seq: self.seq,
            key,
        });
    }

    fn cancel(&mut self, key: &TimerKey) {
        self.pending.retain(|t| &t.key != key);
    }
}

// =============================================================================
// Tokio
// =============================================================================

#[cfg(feature = "tokio")]
pub use self::tokio_impl::TokioScheduler;

#[cfg(feature = "tokio")]
mod tokio_impl {
    use std::collections::HashMap;
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::task::JoinHandle;

    use super::{Scheduler, TimerKey};

    /// Scheduler backed by `tokio::time::sleep` tasks.
    ///
    /// Fired keys are sent on the channel returned by [`TokioScheduler::new`];
    /// the owner forwards them to the gatekeeper. Must be used inside a
    /// tokio runtime.
    pub struct TokioScheduler {
        tx: mpsc::UnboundedSender<TimerKey>,
        tasks: HashMap<TimerKey, JoinHandle<()>>,
    }

    impl TokioScheduler {
        pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerKey>) {
            let (tx, rx) = mpsc::unbounded_channel();
            (Self { tx, tasks: HashMap::new() }, rx)
        }

        /// Number of timers not yet fired or cancelled.
        pub fn active(&self) -> usize {
            self.tasks.values().filter(|h| !h.is_finished()).count()
        }
    }

    impl Scheduler for TokioScheduler {
        fn schedule(&mut self, key: TimerKey, after: Duration) {
            self.tasks.retain(|_, handle| !handle.is_finished());
            self.cancel(&key);

            let tx = self.tx.clone();
            let fired = key.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(after).await;
                if tx.send(fired).is_err() {
                    log::debug!("timer fired after its receiver was dropped");
                }
            });
            self.tasks.insert(key, handle);
        }

        fn cancel(&mut self, key: &TimerKey) {
            if let Some(handle) = self.tasks.remove(key) {
                handle.abort();
            }
        }
    }

    impl Drop for TokioScheduler {
        fn drop(&mut self) {
            for (_, handle) in self.tasks.drain() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watchdog(n: u64) -> TimerKey {
        TimerKey::Watchdog(SubmissionId(n))
    }

    #[test]
    fn test_manual_fires_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(watchdog(1), Duration::from_secs(30));
        scheduler.schedule(TimerKey::AlertExpiry(AlertId(7)), Duration::from_secs(5));

        assert!(scheduler.advance(Duration::from_secs(4)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_secs(1)), vec![TimerKey::AlertExpiry(AlertId(7))]);
        assert_eq!(scheduler.advance(Duration::from_secs(60)), vec![watchdog(1)]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_manual_reschedule_replaces() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(watchdog(1), Duration::from_secs(5));
        scheduler.advance(Duration::from_secs(3));
        scheduler.schedule(watchdog(1), Duration::from_secs(5));

        assert!(scheduler.advance(Duration::from_secs(3)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_secs(2)), vec![watchdog(1)]);
    }

    #[test]
    fn test_manual_cancel() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(watchdog(2), Duration::from_secs(1));
        scheduler.cancel(&watchdog(2));
        scheduler.cancel(&watchdog(99));
        assert!(!scheduler.is_pending(&watchdog(2)));
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[cfg(feature = "tokio")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_fires_and_cancels() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        scheduler.schedule(watchdog(1), Duration::from_secs(30));
        scheduler.schedule(watchdog(2), Duration::from_secs(10));
        scheduler.cancel(&watchdog(1));

        let fired = rx.recv().await;
        assert_eq!(fired, Some(watchdog(2)));

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.active(), 0);
    }
}
