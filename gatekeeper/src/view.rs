//! Display contract used by the gatekeeper.
//!
//! The page owns the elements (file input, submit button, progress bar,
//! file-info panel); the gatekeeper only drives them through these traits.

use std::collections::HashMap;

use crate::models::ButtonLabel;

/// Elements of the upload form.
pub trait UploadView {
    /// Resets the file input so a rejected file cannot be resubmitted.
    fn clear_file_input(&mut self);

    /// Shows the selected file's name and size (MB, two decimals).
    fn show_file_info(&mut self, name: &str, size_mb: &str);

    fn hide_file_info(&mut self);

    /// Current label of the submit button.
    fn submit_label(&self) -> ButtonLabel;

    fn set_submit_label(&mut self, label: ButtonLabel);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Whether the page has a progress indicator at all.
    fn has_progress(&self) -> bool {
        true
    }

    fn set_progress_visible(&mut self, visible: bool);
}

/// Auxiliary buttons addressed by key (download buttons by file name,
/// copy buttons by parameter name).
pub trait ButtonView {
    /// Current label and enabled flag, or `None` if no such button is on
    /// the page.
    fn button_state(&self, button: &str) -> Option<(ButtonLabel, bool)>;

    fn set_button(&mut self, button: &str, label: ButtonLabel, enabled: bool);
}

/// Snapshot of the file-info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size_mb: String,
}

/// In-memory view for tests and headless use.
#[derive(Debug, Clone)]
pub struct MemoryView {
    pub file_info: Option<FileInfo>,
    pub file_input_clears: usize,
    pub submit_label: ButtonLabel,
    pub submit_enabled: bool,
    /// Every label written to the submit button, in order
    pub submit_label_history: Vec<ButtonLabel>,
    /// `None` when the page has no progress element
    pub progress_visible: Option<bool>,
    pub buttons: HashMap<String, (ButtonLabel, bool)>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self {
            file_info: None,
            file_input_clears: 0,
            submit_label: ButtonLabel::upload(),
            submit_enabled: true,
            submit_label_history: Vec::new(),
            progress_visible: Some(false),
            buttons: HashMap::new(),
        }
    }

    /// A page without a progress indicator.
    pub fn without_progress() -> Self {
        Self { progress_visible: None, ..Self::new() }
    }

    /// Adds an auxiliary button.
    pub fn with_button(mut self, button: &str, label: ButtonLabel) -> Self {
        self.buttons.insert(button.to_string(), (label, true));
        self
    }

    pub fn button(&self, button: &str) -> Option<&(ButtonLabel, bool)> {
        self.buttons.get(button)
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadView for MemoryView {
    fn clear_file_input(&mut self) {
        self.file_input_clears += 1;
    }

    fn show_file_info(&mut self, name: &str, size_mb: &str) {
        self.file_info = Some(FileInfo {
            name: name.to_string(),
            size_mb: size_mb.to_string(),
        });
    }

    fn hide_file_info(&mut self) {
        self.file_info = None;
    }

    fn submit_label(&self) -> ButtonLabel {
        self.submit_label.clone()
    }

    fn set_submit_label(&mut self, label: ButtonLabel) {
        self.submit_label_history.push(label.clone());
        self.submit_label = label;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn has_progress(&self) -> bool {
        self.progress_visible.is_some()
    }

    fn set_progress_visible(&mut self, visible: bool) {
        if let Some(progress) = self.progress_visible.as_mut() {
            *progress = visible;
        }
    }
}

impl ButtonView for MemoryView {
    fn button_state(&self, button: &str) -> Option<(ButtonLabel, bool)> {
        self.buttons.get(button).cloned()
    }

    fn set_button(&mut self, button: &str, label: ButtonLabel, enabled: bool) {
        if let Some(entry) = self.buttons.get_mut(button) {
            *entry = (label, enabled);
        }
    }
}
