//! Spreadsheet upload form.
//!
//! Every decision (accept the file, allow the post, restore the button)
//! is delegated to the gatekeeper; this component only forwards events
//! and performs the request.

use bridge_gatekeeper::{SelectedFile, Severity};
use leptos::*;
use web_sys::{Event, HtmlInputElement, SubmitEvent};

use crate::components::{FileInfoPanel, ProgressIndicator};
use crate::page::{PageContext, SharedGatekeeper};
use crate::services::{outcome_of, presentation, upload_spreadsheet, Presentation};
use crate::{endpoint, AppError, UploadReply, RESULTS_CONTAINER_ID};

#[component]
pub fn UploadForm(ctx: PageContext) -> impl IntoView {
    let PageContext { gatekeeper, view, .. } = ctx;
    let (project_name, set_project_name) = create_signal(String::new());

    let on_file_change = {
        let gatekeeper = gatekeeper.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| SelectedFile::new(file.name(), file.size() as u64, file.type_()));
            gatekeeper.borrow_mut().on_file_change(file);
        }
    };

    let on_submit = {
        let gatekeeper = gatekeeper.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let submitted = gatekeeper.borrow_mut().submit();
            let Ok(id) = submitted else {
                return;
            };

            let file = view
                .file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let url = endpoint(&gatekeeper.borrow().config().upload_endpoint);
            let project = project_name.get_untracked();
            let gatekeeper = gatekeeper.clone();

            spawn_local(async move {
                let result = match file {
                    Some(file) => upload_spreadsheet(&url, file, &project).await,
                    None => Err(AppError::Dom("file input is empty".to_string())),
                };

                let outcome = outcome_of(&result);
                gatekeeper.borrow_mut().complete(id, outcome);

                match result {
                    Ok(reply) => present_reply(&gatekeeper, reply),
                    Err(e) => log::error!("❌ Upload failed: {}", e),
                }
            });
        }
    };

    let on_reset = {
        let gatekeeper = gatekeeper.clone();
        move |_: Event| {
            set_project_name.set(String::new());
            gatekeeper.borrow_mut().reset_form();
        }
    };

    let file_input = view.file_input;

    view! {
        <form id="uploadForm" enctype="multipart/form-data" on:submit=on_submit on:reset=on_reset>
            <div class="mb-3">
                <label for="project_name" class="form-label">"Project name"</label>
                <input
                    type="text"
                    id="project_name"
                    name="project_name"
                    class="form-control"
                    placeholder="BRIDGE PROJECT"
                    prop:value=project_name
                    on:input=move |ev| set_project_name.set(event_target_value(&ev))
                />
            </div>

            <div class="mb-3">
                <label for="file" class="form-label">"Bridge parameter spreadsheet (.xlsx, .xls)"</label>
                <input
                    type="file"
                    id="file"
                    name="file"
                    class="form-control"
                    accept=".xlsx,.xls"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>

            <FileInfoPanel info=view.file_info/>
            <ProgressIndicator visible=view.progress_visible/>

            <button
                type="submit"
                id="uploadBtn"
                class="btn btn-primary"
                disabled=move || !view.submit_enabled.get()
            >
                {move || {
                    let label = view.submit_label.get();
                    view! {
                        <i class=format!("{} me-2", label.icon)></i>
                        {label.text}
                    }
                }}
            </button>
        </form>
    }
}

/// Follows a redirect, or shows the returned page: inside the results
/// container when the page has one, otherwise in place of the document.
fn present_reply(gatekeeper: &SharedGatekeeper, reply: UploadReply) {
    let container = document().get_element_by_id(RESULTS_CONTAINER_ID);

    match presentation(reply, container.is_some()) {
        Presentation::Navigate(url) => {
            log::info!("Upload accepted, following redirect to {}", url);
            if let Err(e) = window().location().set_href(&url) {
                log::error!("Navigation failed: {:?}", e);
            }
        }
        Presentation::Results(html) => {
            if let Some(container) = container {
                container.set_inner_html(&html);
            }
        }
        Presentation::Document(html) => match document().document_element() {
            Some(root) => {
                log::info!("Upload accepted, showing results page");
                root.set_inner_html(&html);
            }
            None => {
                gatekeeper
                    .borrow_mut()
                    .show_alert("Spreadsheet processed successfully.", Severity::Success);
            }
        },
    }
}
