//! Multipart upload of the bridge spreadsheet to the backend.

use bridge_gatekeeper::SubmissionOutcome;
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::{AppError, AppResult, UploadReply};

/// Posts `file` (and the optional project name) as `multipart/form-data`.
pub async fn upload_spreadsheet(url: &str, file: File, project_name: &str) -> AppResult<UploadReply> {
    let form_data = FormData::new().map_err(|e| AppError::Dom(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| AppError::Dom(format!("Failed to append file: {:?}", e)))?;

    let project_name = project_name.trim();
    if !project_name.is_empty() {
        form_data
            .append_with_str("project_name", project_name)
            .map_err(|e| AppError::Dom(format!("Failed to append project name: {:?}", e)))?;
    }

    let response = Request::post(url).body(form_data)?.send().await?;
    read_reply(response).await
}

async fn read_reply(response: Response) -> AppResult<UploadReply> {
    if !response.ok() {
        return Err(AppError::Upload(format!("Server error ({})", response.status())));
    }

    if response.redirected() {
        return Ok(UploadReply::Redirect(response.url()));
    }

    let html = response
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read response: {}", e)))?;
    Ok(UploadReply::Page(html))
}

/// Where an accepted upload's reply ends up on the page.
#[derive(Clone, Debug, PartialEq)]
pub enum Presentation {
    /// Navigate the browser to the URL.
    Navigate(String),
    /// Render the fragment into the results container.
    Results(String),
    /// The reply is a whole page; it replaces the current document.
    Document(String),
}

/// Decides how to show `reply`, given whether the page has a results
/// container.
pub fn presentation(reply: UploadReply, has_results_container: bool) -> Presentation {
    match reply {
        UploadReply::Redirect(url) => Presentation::Navigate(url),
        UploadReply::Page(html) if has_results_container => Presentation::Results(html),
        UploadReply::Page(html) => Presentation::Document(html),
    }
}

/// Collapses an upload result into what the gatekeeper needs to know.
pub fn outcome_of(result: &AppResult<UploadReply>) -> SubmissionOutcome {
    match result {
        Ok(_) => SubmissionOutcome::Success,
        Err(AppError::Upload(msg)) => SubmissionOutcome::Failure(format!("Upload failed: {}", msg)),
        Err(e) => SubmissionOutcome::Failure(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_of_success() {
        let result = Ok(UploadReply::Redirect("/results/42".into()));
        assert_eq!(outcome_of(&result), SubmissionOutcome::Success);
    }

    #[test]
    fn test_outcome_of_failures() {
        let rejected = Err(AppError::Upload("Server error (413)".into()));
        assert_eq!(
            outcome_of(&rejected),
            SubmissionOutcome::Failure("Upload failed: Server error (413)".into())
        );

        let offline = Err(AppError::Network("Failed to fetch".into()));
        assert_eq!(
            outcome_of(&offline),
            SubmissionOutcome::Failure("Network error: Failed to fetch".into())
        );
    }

    #[test]
    fn test_presentation_of_redirect() {
        let reply = UploadReply::Redirect("/results/42".into());
        assert_eq!(presentation(reply.clone(), true), Presentation::Navigate("/results/42".into()));
        assert_eq!(presentation(reply, false), Presentation::Navigate("/results/42".into()));
    }

    #[test]
    fn test_results_page_is_never_dropped() {
        let html = "<html><body><a href=\"/download/bridge.dxf\">DXF</a></body></html>".to_string();

        assert_eq!(
            presentation(UploadReply::Page(html.clone()), true),
            Presentation::Results(html.clone())
        );
        assert_eq!(presentation(UploadReply::Page(html.clone()), false), Presentation::Document(html));
    }
}
