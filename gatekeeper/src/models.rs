//! Domain models for the upload gatekeeper.
//!
//! # Types
//!
//! - [`SelectedFile`] - the file picked in the file chooser
//! - [`ValidationResult`] - outcome of a file or parameter check
//! - [`SubmissionState`] / [`SubmissionId`] / [`SubmissionOutcome`] - submit lifecycle
//! - [`Severity`] / [`AlertMessage`] / [`AlertId`] - alert banners
//! - [`ButtonLabel`] - icon + text content of a button

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UploadError;

// =============================================================================
// File Selection
// =============================================================================

/// A file chosen by the user. Only its metadata is ever inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Result of a validation pass.
///
/// Same shape as the JSON returned by the backend `/validate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn ok() -> Self {
        Self { valid: true, errors: Vec::new() }
    }

    /// Builds a result from error messages; valid iff there are none.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }

    /// Builds a result from typed errors, keeping their order.
    pub fn from_issues<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = UploadError>,
    {
        Self::from_errors(issues.into_iter().map(|e| e.to_string()).collect())
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

// =============================================================================
// Submission Lifecycle
// =============================================================================

/// Lifecycle of the upload form. Not persisted across page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Done,
}

/// Identity of one submit attempt, used to key its watchdog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission-{}", self.0)
    }
}

/// Coarse result of the network request, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

// =============================================================================
// Alerts
// =============================================================================

/// Alert severity, mapped onto the page's alert styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Parses a severity name. Unknown names fall back to `Info`;
    /// the backend's flash category `error` reads as `Danger`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" | "error" => Severity::Danger,
            _ => Severity::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Font Awesome icon name (without the `fa-` prefix).
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Danger | Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }

    /// CSS class for the alert element.
    pub fn css_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.name())
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        Severity::from_name(&name)
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::from_name(name)
    }
}

/// Identity of a displayed alert, used to key its expiry timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlertId(pub u64);

/// A transient banner shown in the alert region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMessage {
    pub id: AlertId,
    pub text: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    /// Permanent alerts are never auto-dismissed
    pub permanent: bool,
}

/// An alert already on the page before the gatekeeper started
/// (server flash messages).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashMessage {
    pub message: String,
    #[serde(alias = "category", default)]
    pub severity: Severity,
    #[serde(default)]
    pub permanent: bool,
}

// =============================================================================
// Buttons
// =============================================================================

/// Icon and text content of a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabel {
    /// Icon classes, e.g. `fas fa-cloud-upload-alt`
    pub icon: String,
    /// Visible text (may be empty for icon-only buttons)
    pub text: String,
}

impl ButtonLabel {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self { icon: icon.into(), text: text.into() }
    }

    /// Spinner label used while an action is in flight.
    pub fn busy(text: impl Into<String>) -> Self {
        Self::new("fas fa-spinner fa-spin", text)
    }

    /// Default label of the upload form's submit button.
    pub fn upload() -> Self {
        Self::new("fas fa-cloud-upload-alt", "Upload and Process")
    }

    /// Icon-only success tick shown after a clipboard copy.
    pub fn copied() -> Self {
        Self::new("fas fa-check text-success", "")
    }

    /// Label of the parameter-details toggle for the given state.
    pub fn details_toggle(expanded: bool) -> Self {
        if expanded {
            Self::new("fas fa-chevron-up", "Hide Details")
        } else {
            Self::new("fas fa-chevron-down", "Show Details")
        }
    }
}

impl Default for ButtonLabel {
    fn default() -> Self {
        Self::upload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::from_name("critical"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
        assert_eq!(Severity::from_name("Warning"), Severity::Warning);
        assert_eq!(Severity::from_name("error"), Severity::Danger);
    }

    #[test]
    fn test_severity_icons() {
        assert_eq!(Severity::Success.icon(), "check-circle");
        assert_eq!(Severity::Danger.icon(), "exclamation-triangle");
        assert_eq!(Severity::Warning.icon(), "exclamation-triangle");
        assert_eq!(Severity::Info.icon(), "info-circle");
    }

    #[test]
    fn test_details_toggle_label() {
        assert_eq!(ButtonLabel::details_toggle(true).text, "Hide Details");
        assert_eq!(ButtonLabel::details_toggle(false).icon, "fas fa-chevron-down");
    }

    #[test]
    fn test_flash_message_deserialization() {
        let json = r#"[
            {"message": "File not found", "category": "error"},
            {"message": "Welcome", "severity": "mystery", "permanent": true}
        ]"#;

        let flashes: Vec<FlashMessage> = serde_json::from_str(json).unwrap();
        assert_eq!(flashes[0].severity, Severity::Danger);
        assert!(!flashes[0].permanent);
        assert_eq!(flashes[1].severity, Severity::Info);
        assert!(flashes[1].permanent);
    }

    #[test]
    fn test_validation_result_constructors() {
        assert!(ValidationResult::ok().is_valid());
        assert_eq!(ValidationResult::from_errors(Vec::new()), ValidationResult::ok());

        let failed = ValidationResult::from_issues([UploadError::MissingFile]);
        assert!(!failed.valid);
        assert_eq!(failed.errors, vec!["Please select a file to upload.".to_string()]);
    }

    #[test]
    fn test_validation_result_from_backend_json() {
        let json = r#"{"valid": false, "errors": ["nspan: Must be an integer"]}"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
    }
}
