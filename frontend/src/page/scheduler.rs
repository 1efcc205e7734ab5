//! [`Scheduler`] on top of browser timeouts.
//!
//! Timeouts are fire-and-forget; a key is live only while its generation
//! is the latest one recorded. Cancelling or rescheduling a key makes the
//! older timeout a no-op when it fires, so no callback is ever dropped
//! while it runs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use bridge_gatekeeper::{Scheduler, TimerKey};
use gloo_timers::callback::Timeout;

/// Callback receiving fired keys.
pub type TimerSink = Rc<dyn Fn(TimerKey)>;

#[derive(Default)]
struct TimerState {
    next_generation: u64,
    live: HashMap<TimerKey, u64>,
    sink: Option<TimerSink>,
}

/// Browser scheduler. Fired keys go to the sink set with
/// [`GlooScheduler::set_sink`].
#[derive(Clone, Default)]
pub struct GlooScheduler {
    state: Rc<RefCell<TimerState>>,
}

impl GlooScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the receiver of fired keys, normally the gatekeeper's
    /// `on_timer`.
    pub fn set_sink(&self, sink: TimerSink) {
        self.state.borrow_mut().sink = Some(sink);
    }

    fn fire(state: &Rc<RefCell<TimerState>>, key: TimerKey, generation: u64) {
        let sink = {
            let mut state = state.borrow_mut();
            if state.live.get(&key) != Some(&generation) {
                return;
            }
            state.live.remove(&key);
            state.sink.clone()
        };

        match sink {
            Some(deliver) => deliver(key),
            None => log::warn!("timer {} fired with no sink installed", key),
        }
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&mut self, key: TimerKey, after: Duration) {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.next_generation += 1;
            let generation = state.next_generation;
            state.live.insert(key.clone(), generation);
            generation
        };

        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        let state = Rc::clone(&self.state);
        let _ = Timeout::new(millis, move || GlooScheduler::fire(&state, key, generation)).forget();
    }

    fn cancel(&mut self, key: &TimerKey) {
        self.state.borrow_mut().live.remove(key);
    }
}
