//! BridgeCanvas - browser frontend
//!
//! A WebAssembly layer over the server-rendered BridgeCanvas pages. It
//! gates the spreadsheet upload, shows alert banners and validates bridge
//! parameters while they are typed. All decisions are delegated to
//! [`bridge_gatekeeper`]; this crate binds it to the DOM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Server-rendered page                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  #alertContainer  ── AlertRegion                             │
//! │  #uploadApp       ── UploadForm                              │
//! │                      ├── FileInfoPanel                       │
//! │                      └── ProgressIndicator                   │
//! │  #parameterApp    ── ParameterPanel                          │
//! │  [data-filename]  ── download buttons (click hooks)          │
//! └─────────────────────────────────────────────────────────────┘
//!                │ events                ▲ signals / DOM
//!                ▼                       │
//!         Rc<RefCell<Gatekeeper<PageView, SignalNotifier, GlooScheduler>>>
//! ```
//!
//! # Modules
//!
//! - [`config`] - Element ids, endpoints, embedded config and flashes
//! - [`types`] - Upload replies and application errors
//! - [`page`] - Gatekeeper capabilities backed by signals and timeouts
//! - [`components`] - UI components
//! - [`services`] - Upload, remote validation and clipboard

use leptos::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod page;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, UploadReply};

// Page bindings
pub use page::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Boots the frontend: logging, the shared gatekeeper, then every mount
/// point the current page provides.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🌉 BridgeCanvas - starting gatekeeper");

    let ctx = PageContext::new(load_config(), load_flash_messages());

    mount_alerts(&ctx);

    if let Some(host) = element_by_id(UPLOAD_MOUNT_ID) {
        let ctx = ctx.clone();
        mount_to(host, move || view! { <UploadForm ctx=ctx/> });
        log::debug!("Mounted upload form");
    }

    if let Some(host) = element_by_id(PARAMETER_MOUNT_ID) {
        let ctx = ctx.clone();
        mount_to(host, move || view! { <ParameterPanel ctx=ctx/> });
        log::debug!("Mounted parameter panel");
    }

    hook_download_buttons(&ctx.gatekeeper);
}

/// Mounts the alert region into `#alertContainer`, or at the top of the
/// first `.container`, or at the top of the body.
fn mount_alerts(ctx: &PageContext) {
    let host = match element_by_id(ALERT_CONTAINER_ID) {
        Some(host) => host,
        None => match prepend_host() {
            Some(host) => host,
            None => {
                log::warn!("No place to render alerts");
                return;
            }
        },
    };

    let alerts = ctx.alerts;
    let gatekeeper = ctx.gatekeeper.clone();
    mount_to(host, move || view! { <AlertRegion alerts=alerts gatekeeper=gatekeeper/> });
}

fn prepend_host() -> Option<HtmlElement> {
    let document = gloo_utils::document();
    let parent = document
        .query_selector(".container")
        .ok()
        .flatten()
        .or_else(|| document.body().map(Into::into))?;

    let host = document.create_element("div").ok()?;
    parent.insert_before(&host, parent.first_child().as_ref()).ok()?;
    host.dyn_into::<HtmlElement>().ok()
}

/// Puts every `[data-filename]` button into its busy state while the
/// browser starts the download.
fn hook_download_buttons(gatekeeper: &SharedGatekeeper) {
    let Ok(buttons) = gloo_utils::document().query_selector_all("[data-filename]") else {
        return;
    };

    for index in 0..buttons.length() {
        let Some(node) = buttons.item(index) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let Some(filename) = button.get_attribute("data-filename") else {
            continue;
        };

        let gatekeeper = gatekeeper.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            gatekeeper.borrow_mut().begin_download(&filename);
        });
        if let Err(e) =
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            log::error!("Failed to hook download button: {:?}", e);
        }
        // the listener lives as long as the page
        on_click.forget();
    }
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
