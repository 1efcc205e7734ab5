//! Error types for the upload gatekeeper.
//!
//! Every variant is recoverable and its `Display` string is the exact
//! message shown to the user in an alert banner:
//!
//! - [`UploadError::OversizedFile`] / [`UploadError::UnsupportedFileType`] - file checks
//! - [`UploadError::MissingFile`] - submit without a selection
//! - [`UploadError::OutOfRangeParameter`] / [`UploadError::NonNumericParameter`] - parameter form
//! - [`UploadError::ClipboardWriteFailure`] - copy helper

use thiserror::Error;

// =============================================================================
// Gatekeeper Errors
// =============================================================================

/// Errors raised while gating an upload or a parameter form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Selected file is larger than the configured maximum.
    #[error("File size exceeds {limit} limit.")]
    OversizedFile { limit: String },

    /// Selected file's MIME type is not in the allow-list.
    #[error("Invalid file type. Must be one of {allowed}.")]
    UnsupportedFileType { allowed: String },

    /// Submit was requested with no file selected.
    #[error("Please select a file to upload.")]
    MissingFile,

    /// Parameter outside its min/max bounds.
    #[error("{field}: {message}")]
    OutOfRangeParameter { field: String, message: String },

    /// Parameter is not a finite number, or not whole for integer fields.
    #[error("{field}: {message}")]
    NonNumericParameter { field: String, message: String },

    /// The browser refused the clipboard write.
    #[error("Failed to copy to clipboard")]
    ClipboardWriteFailure(String),

    /// A submission is already in flight for this form.
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// Configuration could not be loaded.
    #[error("Invalid gatekeeper configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::Config(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for gatekeeper operations.
pub type UploadResult<T> = Result<T, UploadError>;
