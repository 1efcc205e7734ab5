//! Alert banner capability.
//!
//! The gatekeeper never renders alerts itself; it talks to a [`Notifier`].
//! Expiry is not the notifier's job either: the gatekeeper schedules a
//! timer per non-permanent alert and calls [`Notifier::dismiss`] when it
//! fires.

use chrono::Utc;

use crate::models::{AlertId, AlertMessage, Severity};

/// Something that can display and remove alert banners.
pub trait Notifier {
    /// Displays a new alert above the existing ones and returns its id.
    fn show(&mut self, message: &str, severity: Severity, permanent: bool) -> AlertId;

    /// Removes one alert. Returns `false` if it was already gone.
    fn dismiss(&mut self, id: AlertId) -> bool;

    /// Removes every alert.
    fn dismiss_all(&mut self);
}

/// In-memory alert list, newest first.
///
/// Used directly in tests and as the backing store of the frontend's
/// signal-based notifier.
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    next_id: u64,
    alerts: Vec<AlertMessage>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts currently displayed, newest first.
    pub fn alerts(&self) -> &[AlertMessage] {
        &self.alerts
    }

    pub fn get(&self, id: AlertId) -> Option<&AlertMessage> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Texts of the displayed alerts, newest first.
    pub fn texts(&self) -> Vec<&str> {
        self.alerts.iter().map(|a| a.text.as_str()).collect()
    }
}

impl Notifier for AlertBoard {
    fn show(&mut self, message: &str, severity: Severity, permanent: bool) -> AlertId {
        self.next_id += 1;
        let id = AlertId(self.next_id);
        self.alerts.insert(
            0,
            AlertMessage {
                id,
                text: message.to_string(),
                severity,
                created_at: Utc::now(),
                permanent,
            },
        );
        id
    }

    fn dismiss(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    fn dismiss_all(&mut self) {
        self.alerts.clear();
    }
}

/// Notifier that displays nothing. Alerts still get ids so timers work.
#[derive(Debug, Default)]
pub struct NullNotifier {
    next_id: u64,
}

impl Notifier for NullNotifier {
    fn show(&mut self, message: &str, severity: Severity, _permanent: bool) -> AlertId {
        log::debug!("[{}] {}", severity.name(), message);
        self.next_id += 1;
        AlertId(self.next_id)
    }

    fn dismiss(&mut self, _id: AlertId) -> bool {
        false
    }

    fn dismiss_all(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alerts_are_prepended() {
        let mut board = AlertBoard::new();
        board.show("first", Severity::Info, false);
        board.show("second", Severity::Warning, false);
        assert_eq!(board.texts(), vec!["second", "first"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut board = AlertBoard::new();
        let id = board.show("bye", Severity::Success, false);
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.is_empty());
    }

    #[test]
    fn test_dismiss_all() {
        let mut board = AlertBoard::new();
        board.show("a", Severity::Info, true);
        board.show("b", Severity::Danger, false);
        board.dismiss_all();
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn test_null_notifier_still_issues_ids() {
        let mut notifier = NullNotifier::default();
        let first = notifier.show("hidden", Severity::Info, false);
        let second = notifier.show("hidden too", Severity::Danger, true);
        assert_ne!(first, second);
        assert!(!notifier.dismiss(first));
    }
}
