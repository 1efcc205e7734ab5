//! # Bridge Gatekeeper - client-side upload gate for BridgeCanvas
//!
//! Validates the bridge-parameter spreadsheet a user picks before it is
//! posted to the design generator, and manages the feedback around the
//! submission (busy button, progress bar, watchdog, alert banners).
//!
//! The spreadsheet contents, the bridge computation and the drawing
//! output all live in the backend; this crate only gates the form.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   on_file_change / submit   ┌──────────────┐
//! │  Page (DOM)  │────────────────────────────▶│  Gatekeeper  │
//! │  or test     │◀──── UploadView/ButtonView ─│  (state)     │
//! └──────────────┘                             └──────┬───────┘
//!        ▲                                            │
//!        │ on_timer(key)          Notifier / Scheduler│
//!        └────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_gatekeeper::{
//!     AlertBoard, Gatekeeper, GatekeeperConfig, ManualScheduler, MemoryView,
//!     SelectedFile, SubmissionOutcome, XLSX_MIME,
//! };
//!
//! let mut gk = Gatekeeper::new(
//!     GatekeeperConfig::default(),
//!     MemoryView::new(),
//!     AlertBoard::new(),
//!     ManualScheduler::new(),
//! );
//!
//! gk.on_file_change(Some(SelectedFile::new("bridge.xlsx", 2048, XLSX_MIME)));
//! let id = gk.submit().expect("valid selection");
//! assert!(gk.complete(id, SubmissionOutcome::Success));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Limits, allow-list, timer durations, endpoints
//! - [`error`] - User-facing error taxonomy
//! - [`models`] - Files, validation results, alerts, button labels
//! - [`validation`] - File and parameter rules
//! - [`notify`] - Alert banner capability
//! - [`schedule`] - Keyed cancellable timers
//! - [`view`] - Display contract
//! - [`gatekeeper`] - The controller
//! - [`format`] - Size and number formatting

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Rules
pub mod validation;

// Capabilities
pub mod notify;
pub mod schedule;
pub mod view;

// Controller
pub mod gatekeeper;

// Helpers
pub mod format;

// =============================================================================
// Re-exports - Configuration & Errors
// =============================================================================

pub use config::{GatekeeperConfig, DEFAULT_MAX_FILE_SIZE, XLSX_MIME, XLS_MIME};
pub use error::{UploadError, UploadResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AlertId,
    AlertMessage,
    ButtonLabel,
    FlashMessage,
    SelectedFile,
    Severity,
    SubmissionId,
    SubmissionOutcome,
    SubmissionState,
    ValidationResult,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    validate_file,
    validate_file_constraints,
    validate_parameters,
    validate_parameters_with,
    ParameterKind,
    ParameterRule,
    ParameterSet,
    PARAMETER_RULES,
};

// =============================================================================
// Re-exports - Capabilities
// =============================================================================

pub use notify::{AlertBoard, Notifier, NullNotifier};
pub use schedule::{ManualScheduler, Scheduler, TimerKey};
#[cfg(feature = "tokio")]
pub use schedule::TokioScheduler;
pub use view::{ButtonView, FileInfo, MemoryView, UploadView};

// =============================================================================
// Re-exports - Controller & Helpers
// =============================================================================

pub use gatekeeper::Gatekeeper;
pub use format::{format_limit, format_megabytes, format_number};
