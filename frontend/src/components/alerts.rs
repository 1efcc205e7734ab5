//! Alert banner region.
//!
//! Renders the notifier's snapshot, newest first. Each banner has a close
//! button; non-permanent banners also expire on their own.

use bridge_gatekeeper::AlertMessage;
use leptos::*;

use crate::page::SharedGatekeeper;

#[component]
pub fn AlertRegion(
    /// Alerts to display, newest first
    alerts: ReadSignal<Vec<AlertMessage>>,
    /// Gatekeeper handling close clicks
    gatekeeper: SharedGatekeeper,
) -> impl IntoView {
    view! {
        <div class="alert-region">
            <For
                each=move || alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let gatekeeper = gatekeeper.clone();
                    let id = alert.id;
                    let icon = format!("fas fa-{} me-2", alert.severity.icon());
                    view! {
                        <div class=alert.severity.css_class() role="alert">
                            <i class=icon></i>
                            {alert.text}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    gatekeeper.borrow_mut().dismiss_alert(id);
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
