//! Signal-backed [`UploadView`] and DOM-backed [`ButtonView`].
//!
//! The upload form is rendered by Leptos, so its state lives in signals
//! that the components read. Auxiliary buttons may come from the server
//! page (download buttons), so they are found by attribute and patched
//! directly.

use bridge_gatekeeper::{ButtonLabel, ButtonView, FileInfo, UploadView};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Spacing class added after an icon that is followed by text.
const ICON_SPACING: &str = "me-2";

/// Reactive state of the upload form.
#[derive(Clone, Copy)]
pub struct PageView {
    pub file_info: RwSignal<Option<FileInfo>>,
    pub submit_label: RwSignal<ButtonLabel>,
    pub submit_enabled: RwSignal<bool>,
    pub progress_visible: RwSignal<bool>,
    pub file_input: NodeRef<html::Input>,
}

impl PageView {
    pub fn new() -> Self {
        Self {
            file_info: create_rw_signal(None),
            submit_label: create_rw_signal(ButtonLabel::upload()),
            submit_enabled: create_rw_signal(true),
            progress_visible: create_rw_signal(false),
            file_input: create_node_ref::<html::Input>(),
        }
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadView for PageView {
    fn clear_file_input(&mut self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    fn show_file_info(&mut self, name: &str, size_mb: &str) {
        self.file_info.set(Some(FileInfo {
            name: name.to_string(),
            size_mb: size_mb.to_string(),
        }));
    }

    fn hide_file_info(&mut self) {
        self.file_info.set(None);
    }

    fn submit_label(&self) -> ButtonLabel {
        self.submit_label.get_untracked()
    }

    fn set_submit_label(&mut self, label: ButtonLabel) {
        self.submit_label.set(label);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_progress_visible(&mut self, visible: bool) {
        self.progress_visible.set(visible);
    }
}

impl ButtonView for PageView {
    fn button_state(&self, button: &str) -> Option<(ButtonLabel, bool)> {
        let el = find_button(button)?;
        let icon = el
            .query_selector("i")
            .ok()
            .flatten()
            .map(|i| {
                i.class_name()
                    .split_whitespace()
                    .filter(|class| *class != ICON_SPACING)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        let text = el.text_content().unwrap_or_default().trim().to_string();
        let enabled = !el.has_attribute("disabled");
        Some((ButtonLabel::new(icon, text), enabled))
    }

    fn set_button(&mut self, button: &str, label: ButtonLabel, enabled: bool) {
        let Some(el) = find_button(button) else {
            return;
        };
        if let Err(e) = render_label(&el, &label) {
            log::warn!("Could not relabel button {:?}: {:?}", button, e);
        }
        let toggled = if enabled {
            el.remove_attribute("disabled")
        } else {
            el.set_attribute("disabled", "")
        };
        if let Err(e) = toggled {
            log::warn!("Could not toggle button {:?}: {:?}", button, e);
        }
    }
}

/// Finds a button by `data-button-key` or, for server-rendered download
/// buttons, by `data-filename`.
fn find_button(key: &str) -> Option<Element> {
    let escaped = key.replace('\\', "\\\\").replace('"', "\\\"");
    let selector = format!(r#"[data-button-key="{0}"], [data-filename="{0}"]"#, escaped);
    gloo_utils::document().query_selector(&selector).ok().flatten()
}

/// Replaces the element's children with `<i class=icon></i>text`.
fn render_label(el: &Element, label: &ButtonLabel) -> Result<(), wasm_bindgen::JsValue> {
    let document = gloo_utils::document();
    el.set_text_content(None);

    if !label.icon.is_empty() {
        let icon = document.create_element("i")?;
        if label.text.is_empty() {
            icon.set_class_name(&label.icon);
        } else {
            icon.set_class_name(&format!("{} {}", label.icon, ICON_SPACING));
        }
        el.append_child(&icon)?;
    }
    if !label.text.is_empty() {
        let text = document.create_text_node(&label.text);
        el.append_child(text.unchecked_ref::<web_sys::Node>())?;
    }
    Ok(())
}
