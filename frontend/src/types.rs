//! Common types used across the frontend application.
//!
//! Domain types (files, alerts, validation results) come from
//! `bridge_gatekeeper`; this module only adds what the browser side needs.

use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// What the backend did with an accepted upload.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadReply {
    /// The backend redirected; the page should follow.
    Redirect(String),
    /// The backend answered with a rendered page fragment.
    Page(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Backend rejected the upload.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Clipboard API unavailable or refused.
    Clipboard(String),
    /// Unexpected response shape.
    Validation(String),
    /// Browser API call failed.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Dom(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Upload("Server error (413)".into());
        assert_eq!(err.to_string(), "Upload error: Server error (413)");
    }
}
