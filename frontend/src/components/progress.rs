//! Upload progress indicator and selected-file panel.

use bridge_gatekeeper::FileInfo;
use leptos::*;

/// Indeterminate progress bar shown while a submission is in flight.
#[component]
pub fn ProgressIndicator(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="progress mb-3"
            id="uploadProgress"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div
                class="progress-bar progress-bar-striped progress-bar-animated"
                role="progressbar"
                style="width: 100%;"
            >
                "Generating bridge drawings..."
            </div>
        </div>
    }
}

/// Name and size of the accepted file.
#[component]
pub fn FileInfoPanel(info: RwSignal<Option<FileInfo>>) -> impl IntoView {
    view! {
        <div
            id="fileInfo"
            style:display=move || if info.with(Option::is_some) { "block" } else { "none" }
        >
            {move || {
                info.get().map(|info| {
                    view! {
                        <div class="alert alert-info">
                            <i class="fas fa-file-excel me-2"></i>
                            <strong>{info.name}</strong>
                            " (" {info.size_mb} " MB)"
                        </div>
                    }
                })
            }}
        </div>
    }
}
