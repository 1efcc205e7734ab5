//! Browser bindings for the gatekeeper.
//!
//! - [`PageView`] - upload form signals and DOM buttons
//! - [`SignalNotifier`] - alert list published as a signal
//! - [`GlooScheduler`] - `setTimeout`-based timers

mod notifier;
mod scheduler;
mod view;

pub use notifier::*;
pub use scheduler::*;
pub use view::*;

use std::cell::RefCell;
use std::rc::Rc;

use bridge_gatekeeper::{AlertMessage, FlashMessage, Gatekeeper, GatekeeperConfig, TimerKey};
use leptos::ReadSignal;

/// Gatekeeper wired to the browser.
pub type PageGatekeeper = Gatekeeper<PageView, SignalNotifier, GlooScheduler>;

/// Shared handle used by event handlers and timer callbacks.
pub type SharedGatekeeper = Rc<RefCell<PageGatekeeper>>;

/// Everything the components need to render and drive the page.
#[derive(Clone)]
pub struct PageContext {
    pub gatekeeper: SharedGatekeeper,
    pub view: PageView,
    pub alerts: ReadSignal<Vec<AlertMessage>>,
}

impl PageContext {
    /// Builds the gatekeeper, routes fired timers back into it and adopts
    /// the alerts the server rendered with the page.
    pub fn new(config: GatekeeperConfig, flashes: Vec<FlashMessage>) -> Self {
        let view = PageView::new();
        let notifier = SignalNotifier::new();
        let alerts = notifier.alerts();
        let scheduler = GlooScheduler::new();
        let timers = scheduler.clone();

        let gatekeeper = Rc::new(RefCell::new(Gatekeeper::new(config, view, notifier, scheduler)));

        let weak = Rc::downgrade(&gatekeeper);
        timers.set_sink(Rc::new(move |key: TimerKey| {
            if let Some(gatekeeper) = weak.upgrade() {
                gatekeeper.borrow_mut().on_timer(key);
            }
        }));

        if !flashes.is_empty() {
            gatekeeper.borrow_mut().adopt_alerts(flashes);
        }

        Self { gatekeeper, view, alerts }
    }
}
