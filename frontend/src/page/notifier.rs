//! Alert notifier that mirrors an [`AlertBoard`] into a Leptos signal.

use bridge_gatekeeper::{AlertBoard, AlertId, AlertMessage, Notifier, Severity};
use leptos::*;

/// Keeps the authoritative alert list and publishes a snapshot after
/// every change for the `AlertRegion` component to render.
pub struct SignalNotifier {
    board: AlertBoard,
    rendered: RwSignal<Vec<AlertMessage>>,
}

impl SignalNotifier {
    pub fn new() -> Self {
        Self {
            board: AlertBoard::new(),
            rendered: create_rw_signal(Vec::new()),
        }
    }

    /// Read side for the alert region.
    pub fn alerts(&self) -> ReadSignal<Vec<AlertMessage>> {
        self.rendered.read_only()
    }

    fn publish(&self) {
        self.rendered.set(self.board.alerts().to_vec());
    }
}

impl Default for SignalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for SignalNotifier {
    fn show(&mut self, message: &str, severity: Severity, permanent: bool) -> AlertId {
        let id = self.board.show(message, severity, permanent);
        log::info!("[alert:{}] {}", severity.name(), message);
        self.publish();
        id
    }

    fn dismiss(&mut self, id: AlertId) -> bool {
        let removed = self.board.dismiss(id);
        if removed {
            self.publish();
        }
        removed
    }

    fn dismiss_all(&mut self) {
        self.board.dismiss_all();
        self.publish();
    }
}
