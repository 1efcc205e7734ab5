//! Server-side parameter validation via the backend's `/validate` endpoint.

use bridge_gatekeeper::{ParameterSet, ValidationResult};
use gloo_net::http::Request;

use crate::{AppError, AppResult};

/// Posts the parameters as JSON and returns the backend's verdict.
pub async fn validate_remote(url: &str, parameters: &ParameterSet) -> AppResult<ValidationResult> {
    let response = Request::post(url).json(&parameters.to_json())?.send().await?;

    if !response.ok() {
        return Err(AppError::Network(format!("Server error ({})", response.status())));
    }

    response
        .json::<ValidationResult>()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to parse response: {}", e)))
}
