//! Gatekeeper configuration.
//!
//! Defaults mirror what the backend enforces: 16 MiB uploads of `.xlsx`
//! or `.xls` workbooks. A page may override any field by embedding a JSON
//! object; missing fields keep their default.

use std::time::Duration;

use serde::Deserialize;

use crate::error::UploadResult;
use crate::format::format_limit;

/// MIME type of `.xlsx` workbooks.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type of legacy `.xls` workbooks.
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Default maximum upload size (16 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Tunables for file checks, timers and endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatekeeperConfig {
    /// Largest accepted upload, in bytes
    pub max_file_size: u64,
    /// Accepted MIME types
    pub allowed_mime_types: Vec<String>,
    /// Watchdog before a stuck submit button is re-enabled
    #[serde(with = "millis")]
    pub submit_watchdog: Duration,
    /// Lifetime of a non-permanent alert
    #[serde(with = "millis")]
    pub alert_ttl: Duration,
    /// How long the copy button shows its tick
    #[serde(with = "millis")]
    pub copy_feedback: Duration,
    /// How long a download button stays busy
    #[serde(with = "millis")]
    pub download_reset: Duration,
    /// Form post target
    pub upload_endpoint: String,
    /// JSON parameter validation endpoint
    pub validate_endpoint: String,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: vec![XLSX_MIME.to_string(), XLS_MIME.to_string()],
            submit_watchdog: Duration::from_secs(30),
            alert_ttl: Duration::from_secs(5),
            copy_feedback: Duration::from_millis(1500),
            download_reset: Duration::from_secs(2),
            upload_endpoint: "/upload".to_string(),
            validate_endpoint: "/validate".to_string(),
        }
    }
}

impl GatekeeperConfig {
    /// Parses a JSON override; absent fields keep their defaults.
    pub fn from_json(json: &str) -> UploadResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Human-readable size limit, e.g. `16MB`.
    pub fn max_file_size_label(&self) -> String {
        format_limit(self.max_file_size)
    }

    /// Comma-joined allow-list for error messages.
    pub fn allowed_types_label(&self) -> String {
        self.allowed_mime_types.join(", ")
    }

    /// Exact-match check against the allow-list.
    pub fn is_allowed_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|allowed| allowed == mime_type)
    }
}

/// Durations are written as integer milliseconds in JSON.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatekeeperConfig::default();
        assert_eq!(config.max_file_size, 16 * 1024 * 1024);
        assert_eq!(config.max_file_size_label(), "16MB");
        assert_eq!(config.submit_watchdog, Duration::from_secs(30));
        assert_eq!(config.alert_ttl, Duration::from_secs(5));
        assert!(config.is_allowed_type(XLSX_MIME));
        assert!(config.is_allowed_type(XLS_MIME));
        assert!(!config.is_allowed_type("text/csv"));
    }

    #[test]
    fn test_partial_json_override() {
        let config = GatekeeperConfig::from_json(
            r#"{"maxFileSize": 1048576, "submitWatchdog": 10000}"#,
        )
        .unwrap();

        assert_eq!(config.max_file_size_label(), "1MB");
        assert_eq!(config.submit_watchdog, Duration::from_secs(10));
        // untouched fields keep defaults
        assert_eq!(config.alert_ttl, Duration::from_secs(5));
        assert_eq!(config.upload_endpoint, "/upload");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        assert!(GatekeeperConfig::from_json("[1, 2]").is_err());
    }
}
