//! Application configuration.
//!
//! Element ids are part of the contract with the server-rendered pages.
//! Gatekeeper tunables default to [`GatekeeperConfig::default`] and can be
//! overridden per page with an embedded JSON block:
//!
//! ```html
//! <script id="gatekeeper-config" type="application/json">
//!   {"maxFileSize": 16777216, "submitWatchdog": 30000}
//! </script>
//! ```

use bridge_gatekeeper::{FlashMessage, GatekeeperConfig};

/// Backend base URL. Empty means same origin as the page.
pub const BACKEND_URL: &str = "";

/// JSON block holding a [`GatekeeperConfig`] override.
pub const CONFIG_ELEMENT_ID: &str = "gatekeeper-config";

/// JSON block holding the server's flash messages.
pub const FLASH_ELEMENT_ID: &str = "flash-messages";

/// Dedicated alert region. Falls back to the first `.container`.
pub const ALERT_CONTAINER_ID: &str = "alertContainer";

/// Mount point of the upload form.
pub const UPLOAD_MOUNT_ID: &str = "uploadApp";

/// Mount point of the parameter form.
pub const PARAMETER_MOUNT_ID: &str = "parameterApp";

/// Where a non-redirect upload response is rendered.
pub const RESULTS_CONTAINER_ID: &str = "resultsContainer";

/// Reads the page's config override, falling back to defaults.
pub fn load_config() -> GatekeeperConfig {
    let Some(json) = embedded_json(CONFIG_ELEMENT_ID) else {
        return GatekeeperConfig::default();
    };

    match GatekeeperConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("Loaded gatekeeper config override");
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            GatekeeperConfig::default()
        }
    }
}

/// Reads the flash messages the server rendered with the page.
pub fn load_flash_messages() -> Vec<FlashMessage> {
    embedded_json(FLASH_ELEMENT_ID)
        .and_then(|json| match serde_json::from_str(&json) {
            Ok(flashes) => Some(flashes),
            Err(e) => {
                log::warn!("Ignoring #{}: {}", FLASH_ELEMENT_ID, e);
                None
            }
        })
        .unwrap_or_default()
}

/// Absolute endpoint URL for a configured path.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}

fn embedded_json(id: &str) -> Option<String> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}
