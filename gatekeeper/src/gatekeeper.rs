//! The upload gatekeeper controller.
//!
//! Owns the file selection and submission state of one upload form and
//! drives the injected view, notifier and scheduler.
//!
//! # Submission lifecycle
//!
//! ```text
//!   Idle/Done ──submit()──▶ Validating ──invalid──▶ Idle
//!                               │
//!                             valid
//!                               ▼
//!                          Submitting ──complete(id) or watchdog(id)──▶ Done
//! ```
//!
//! The busy label is restored by whichever of `complete` and the watchdog
//! arrives first; the other is a no-op. The watchdog does not cancel the
//! request, it only keeps the form usable.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::config::GatekeeperConfig;
use crate::error::{UploadError, UploadResult};
use crate::format::format_megabytes;
use crate::models::{
    AlertId, ButtonLabel, FlashMessage, SelectedFile, Severity, SubmissionId, SubmissionOutcome,
    SubmissionState, ValidationResult,
};
use crate::notify::Notifier;
use crate::schedule::{Scheduler, TimerKey};
use crate::validation::{self, ParameterSet};
use crate::view::{ButtonView, UploadView};

#[derive(Debug, Clone)]
struct ActiveSubmission {
    id: SubmissionId,
    original_label: ButtonLabel,
}

#[derive(Debug, Clone)]
struct PendingRestore {
    generation: u64,
    original: ButtonLabel,
    was_enabled: bool,
}

/// Why a submission's busy state is being released.
enum Release {
    Completed(SubmissionOutcome),
    Watchdog,
}

/// Client-side gate in front of the upload form.
pub struct Gatekeeper<V, N, S> {
    config: GatekeeperConfig,
    view: V,
    notifier: N,
    scheduler: S,
    selection: Option<SelectedFile>,
    state: SubmissionState,
    active: Option<ActiveSubmission>,
    submissions: u64,
    expiring_alerts: HashSet<AlertId>,
    restores: HashMap<String, PendingRestore>,
    generations: u64,
}

impl<V, N, S> Gatekeeper<V, N, S>
where
    V: UploadView + ButtonView,
    N: Notifier,
    S: Scheduler,
{
    pub fn new(config: GatekeeperConfig, view: V, notifier: N, scheduler: S) -> Self {
        Self {
            config,
            view,
            notifier,
            scheduler,
            selection: None,
            state: SubmissionState::Idle,
            active: None,
            submissions: 0,
            expiring_alerts: HashSet::new(),
            restores: HashMap::new(),
            generations: 0,
        }
    }

    pub fn config(&self) -> &GatekeeperConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    /// Id of the submission currently holding the busy state.
    pub fn active_submission(&self) -> Option<SubmissionId> {
        self.active.as_ref().map(|a| a.id)
    }

    // -------------------------------------------------------------------------
    // File selection
    // -------------------------------------------------------------------------

    /// Handles a change of the file input.
    ///
    /// Invalid files are rejected with one danger alert per error.
    pub fn on_file_change(&mut self, file: Option<SelectedFile>) -> Option<ValidationResult> {
        let Some(file) = file else {
            self.selection = None;
            self.view.hide_file_info();
            return None;
        };

        self.selection = Some(file.clone());
        let issues = self.check_file(&file);
        for issue in &issues {
            self.show_alert(&issue.to_string(), Severity::Danger);
        }
        Some(ValidationResult::from_issues(issues))
    }

    /// Validates `file` and updates the view: file info on success,
    /// cleared input and hidden info on failure.
    pub fn validate_file(&mut self, file: &SelectedFile) -> ValidationResult {
        ValidationResult::from_issues(self.check_file(file))
    }

    fn check_file(&mut self, file: &SelectedFile) -> Vec<UploadError> {
        let issues = validation::validate_file_constraints(&self.config, file);

        if issues.is_empty() {
            self.view.show_file_info(&file.name, &format_megabytes(file.size_bytes));
        } else {
            log::debug!("rejected {} ({} bytes, {:?})", file.name, file.size_bytes, file.mime_type);
            self.selection = None;
            self.view.clear_file_input();
            self.view.hide_file_info();
        }
        issues
    }

    /// Drops the selection as when the form is reset.
    pub fn reset_form(&mut self) {
        self.selection = None;
        self.view.clear_file_input();
        self.view.hide_file_info();
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Decides whether the form may be posted.
    ///
    /// On `Ok` the caller issues the request and later reports the result
    /// through [`complete`](Self::complete) with the returned id. On `Err`
    /// no request must be made; the user has already been alerted.
    pub fn submit(&mut self) -> UploadResult<SubmissionId> {
        if self.state == SubmissionState::Submitting {
            log::debug!("submit ignored, {:?} still in flight", self.active_submission());
            return Err(UploadError::SubmissionInProgress);
        }

        let Some(file) = self.selection.clone() else {
            let err = UploadError::MissingFile;
            self.show_alert(&err.to_string(), Severity::Warning);
            return Err(err);
        };

        self.state = SubmissionState::Validating;
        let issues = self.check_file(&file);
        if let Some(first) = issues.first().cloned() {
            for issue in &issues {
                self.show_alert(&issue.to_string(), Severity::Danger);
            }
            self.state = SubmissionState::Idle;
            return Err(first);
        }

        self.submissions += 1;
        let id = SubmissionId(self.submissions);
        let original_label = self.view.submit_label();

        self.view.set_submit_enabled(false);
        self.view.set_submit_label(ButtonLabel::busy("Processing..."));
        if self.view.has_progress() {
            self.view.set_progress_visible(true);
        }
        self.scheduler.schedule(TimerKey::Watchdog(id), self.config.submit_watchdog);

        self.active = Some(ActiveSubmission { id, original_label });
        self.state = SubmissionState::Submitting;
        log::info!("{} started for {} ({} MB)", id, file.name, format_megabytes(file.size_bytes));
        Ok(id)
    }

    /// Reports the end of a request. Returns `false` if the submission was
    /// already released (by the watchdog or an earlier call).
    pub fn complete(&mut self, id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        self.release(id, Release::Completed(outcome))
    }

    fn release(&mut self, id: SubmissionId, reason: Release) -> bool {
        let active = match self.active.take() {
            Some(active) if active.id == id => active,
            other => {
                self.active = other;
                log::debug!("{} already released", id);
                return false;
            }
        };

        self.scheduler.cancel(&TimerKey::Watchdog(id));
        self.view.set_submit_label(active.original_label);
        self.view.set_submit_enabled(true);
        if self.view.has_progress() {
            self.view.set_progress_visible(false);
        }
        self.state = SubmissionState::Done;

        match reason {
            Release::Completed(SubmissionOutcome::Success) => {
                log::info!("{} completed", id);
            }
            Release::Completed(SubmissionOutcome::Failure(message)) => {
                log::warn!("{} failed: {}", id, message);
                self.show_alert(&message, Severity::Danger);
            }
            Release::Watchdog => {
                log::warn!(
                    "{} got no response within {:?}, re-enabling the form",
                    id,
                    self.config.submit_watchdog
                );
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Alerts
    // -------------------------------------------------------------------------

    /// Shows an alert that expires after the configured TTL.
    pub fn show_alert(&mut self, message: &str, severity: Severity) -> AlertId {
        self.show_alert_with(message, severity, false)
    }

    pub fn show_alert_with(&mut self, message: &str, severity: Severity, permanent: bool) -> AlertId {
        let id = self.notifier.show(message, severity, permanent);
        if !permanent {
            self.scheduler.schedule(TimerKey::AlertExpiry(id), self.config.alert_ttl);
            self.expiring_alerts.insert(id);
        }
        id
    }

    /// Registers alerts that were rendered before the gatekeeper started.
    pub fn adopt_alerts<I>(&mut self, flashes: I) -> Vec<AlertId>
    where
        I: IntoIterator<Item = FlashMessage>,
    {
        flashes
            .into_iter()
            .map(|flash| self.show_alert_with(&flash.message, flash.severity, flash.permanent))
            .collect()
    }

    /// Closes one alert (e.g. its close button was clicked).
    pub fn dismiss_alert(&mut self, id: AlertId) -> bool {
        if self.expiring_alerts.remove(&id) {
            self.scheduler.cancel(&TimerKey::AlertExpiry(id));
        }
        self.notifier.dismiss(id)
    }

    pub fn dismiss_all_alerts(&mut self) {
        for id in self.expiring_alerts.drain() {
            self.scheduler.cancel(&TimerKey::AlertExpiry(id));
        }
        self.notifier.dismiss_all();
    }

    // -------------------------------------------------------------------------
    // Parameter form
    // -------------------------------------------------------------------------

    /// Checks the parameter form. Has no side effects.
    pub fn validate_parameters(&self, parameters: &ParameterSet) -> ValidationResult {
        validation::validate_parameters(parameters)
    }

    // -------------------------------------------------------------------------
    // Auxiliary buttons
    // -------------------------------------------------------------------------

    /// Puts a download button in its busy state until the reset timer fires.
    pub fn begin_download(&mut self, filename: &str) -> bool {
        let reset = self.config.download_reset;
        self.hold_button(filename, ButtonLabel::busy("Downloading..."), false, reset)
    }

    /// Reports the result of a clipboard write started from `button`.
    pub fn copy_finished(&mut self, button: &str, result: Result<(), String>) -> UploadResult<()> {
        match result {
            Ok(()) => {
                let feedback = self.config.copy_feedback;
                self.hold_button(button, ButtonLabel::copied(), true, feedback);
                Ok(())
            }
            Err(reason) => {
                log::error!("Could not copy text: {}", reason);
                let err = UploadError::ClipboardWriteFailure(reason);
                self.show_alert(&err.to_string(), Severity::Danger);
                Err(err)
            }
        }
    }

    fn hold_button(&mut self, button: &str, label: ButtonLabel, enabled: bool, after: Duration) -> bool {
        let Some((current, current_enabled)) = self.view.button_state(button) else {
            log::debug!("no button {:?} on the page", button);
            return false;
        };

        // A button already held keeps the state it had before the first hold.
        let (original, was_enabled) = match self.restores.remove(button) {
            Some(pending) => {
                self.scheduler.cancel(&TimerKey::ButtonRestore {
                    button: button.to_string(),
                    generation: pending.generation,
                });
                (pending.original, pending.was_enabled)
            }
            None => (current, current_enabled),
        };

        self.generations += 1;
        let generation = self.generations;
        self.view.set_button(button, label, enabled);
        self.scheduler.schedule(
            TimerKey::ButtonRestore { button: button.to_string(), generation },
            after,
        );
        self.restores.insert(
            button.to_string(),
            PendingRestore { generation, original, was_enabled },
        );
        true
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Entry point for fired timers.
    pub fn on_timer(&mut self, key: TimerKey) {
        match key {
            TimerKey::Watchdog(id) => {
                self.release(id, Release::Watchdog);
            }
            TimerKey::AlertExpiry(id) => {
                if self.expiring_alerts.remove(&id) {
                    self.notifier.dismiss(id);
                }
            }
            TimerKey::ButtonRestore { button, generation } => {
                let current = self.restores.get(&button).map(|p| p.generation);
                if current == Some(generation) {
                    if let Some(pending) = self.restores.remove(&button) {
                        self.view.set_button(&button, pending.original, pending.was_enabled);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XLSX_MIME;
    use crate::notify::AlertBoard;
    use crate::schedule::ManualScheduler;
    use crate::view::MemoryView;

    type TestGatekeeper = Gatekeeper<MemoryView, AlertBoard, ManualScheduler>;

    fn gatekeeper() -> TestGatekeeper {
        Gatekeeper::new(
            GatekeeperConfig::default(),
            MemoryView::new().with_button("drawing.dxf", ButtonLabel::new("fas fa-download", "Download")),
            AlertBoard::new(),
            ManualScheduler::new(),
        )
    }

    fn spreadsheet() -> SelectedFile {
        SelectedFile::new("bridge.xlsx", 1_572_864, XLSX_MIME)
    }

    /// Advances the virtual clock and delivers fired timers.
    fn tick(gk: &mut TestGatekeeper, millis: u64) {
        let fired = gk.scheduler_mut().advance(Duration::from_millis(millis));
        for key in fired {
            gk.on_timer(key);
        }
    }

    #[test]
    fn test_valid_selection_shows_file_info() {
        let mut gk = gatekeeper();
        let result = gk.on_file_change(Some(spreadsheet())).unwrap();

        assert!(result.valid);
        let info = gk.view().file_info.clone().unwrap();
        assert_eq!(info.name, "bridge.xlsx");
        assert_eq!(info.size_mb, "1.50");
        assert!(gk.notifier().is_empty());
    }

    #[test]
    fn test_invalid_selection_clears_input_and_alerts() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));

        let csv = SelectedFile::new("bridge.csv", 10, "text/csv");
        let result = gk.on_file_change(Some(csv)).unwrap();

        assert!(!result.valid);
        assert!(gk.selection().is_none());
        assert!(gk.view().file_info.is_none());
        assert_eq!(gk.view().file_input_clears, 1);
        assert_eq!(gk.notifier().alerts()[0].severity, Severity::Danger);
        assert!(gk.notifier().texts()[0].starts_with("Invalid file type."));
    }

    #[test]
    fn test_validate_file_shows_info_for_valid_file() {
        let mut gk = gatekeeper();
        let result = gk.validate_file(&spreadsheet());

        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(gk.view().file_info.as_ref().unwrap().size_mb, "1.50");
        assert_eq!(gk.view().file_input_clears, 0);
    }

    #[test]
    fn test_validate_file_clears_input_for_invalid_file() {
        let mut gk = gatekeeper();
        gk.validate_file(&spreadsheet());

        let oversized = SelectedFile::new("huge.csv", 17 * 1024 * 1024, "text/csv");
        let result = gk.validate_file(&oversized);

        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0], "File size exceeds 16MB limit.");
        assert!(gk.view().file_info.is_none());
        assert_eq!(gk.view().file_input_clears, 1);
        // validate_file reports but does not alert
        assert!(gk.notifier().is_empty());
    }

    #[test]
    fn test_submit_revalidates_selection() {
        let mut gk = gatekeeper();
        gk.selection = Some(SelectedFile::new("huge.xlsx", 16 * 1024 * 1024 + 1, XLSX_MIME));

        let err = gk.submit().unwrap_err();
        assert!(matches!(err, UploadError::OversizedFile { .. }));
        assert_eq!(gk.state(), SubmissionState::Idle);
        assert!(gk.active_submission().is_none());
        assert!(gk.selection().is_none());
        assert!(gk.view().submit_enabled);
        assert!(gk.view().submit_label_history.is_empty());
        assert_eq!(gk.scheduler().pending_count(), 1);
        assert!(!gk.scheduler().is_pending(&TimerKey::Watchdog(SubmissionId(1))));

        let alert = &gk.notifier().alerts()[0];
        assert_eq!(alert.text, "File size exceeds 16MB limit.");
        assert_eq!(alert.severity, Severity::Danger);
    }

    #[test]
    fn test_reset_form_drops_selection() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        gk.reset_form();

        assert!(gk.selection().is_none());
        assert!(gk.view().file_info.is_none());
        assert_eq!(gk.view().file_input_clears, 1);
        assert_eq!(gk.submit().unwrap_err(), UploadError::MissingFile);
    }

    #[test]
    fn test_submit_without_file_is_blocked() {
        let mut gk = gatekeeper();
        let err = gk.submit().unwrap_err();

        assert_eq!(err, UploadError::MissingFile);
        assert_eq!(gk.state(), SubmissionState::Idle);
        assert!(gk.view().submit_enabled);
        assert!(gk.view().submit_label_history.is_empty());
        let alert = &gk.notifier().alerts()[0];
        assert_eq!(alert.text, "Please select a file to upload.");
        assert_eq!(alert.severity, Severity::Warning);
    }

    #[test]
    fn test_submit_sets_busy_state() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();

        assert_eq!(gk.state(), SubmissionState::Submitting);
        assert_eq!(gk.active_submission(), Some(id));
        assert!(!gk.view().submit_enabled);
        assert_eq!(gk.view().submit_label, ButtonLabel::busy("Processing..."));
        assert_eq!(gk.view().progress_visible, Some(true));
        assert!(gk.scheduler().is_pending(&TimerKey::Watchdog(id)));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        gk.submit().unwrap();

        assert_eq!(gk.submit().unwrap_err(), UploadError::SubmissionInProgress);
        assert!(gk.notifier().is_empty());
    }

    #[test]
    fn test_completion_then_watchdog_restores_once() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();

        assert!(gk.complete(id, SubmissionOutcome::Success));
        tick(&mut gk, 30000);
        gk.on_timer(TimerKey::Watchdog(id));
        assert!(!gk.complete(id, SubmissionOutcome::Success));

        let history = &gk.view().submit_label_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[1], ButtonLabel::upload());
        assert!(gk.view().submit_enabled);
        assert_eq!(gk.view().progress_visible, Some(false));
        assert_eq!(gk.state(), SubmissionState::Done);
    }

    #[test]
    fn test_watchdog_then_failure_restores_once() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();

        tick(&mut gk, 29000);
        assert!(!gk.view().submit_enabled);
        tick(&mut gk, 1000);
        assert!(gk.view().submit_enabled);
        assert_eq!(gk.state(), SubmissionState::Done);

        assert!(!gk.complete(id, SubmissionOutcome::Failure("Server error (500)".into())));
        assert_eq!(gk.view().submit_label_history.len(), 2);
        assert!(gk.notifier().is_empty());
    }

    #[test]
    fn test_failure_outcome_alerts() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();

        gk.complete(id, SubmissionOutcome::Failure("Server error (413)".into()));
        assert_eq!(gk.notifier().texts(), vec!["Server error (413)"]);
        assert!(!gk.scheduler().is_pending(&TimerKey::Watchdog(id)));
    }

    #[test]
    fn test_stale_completion_does_not_touch_new_submission() {
        let mut gk = gatekeeper();
        gk.on_file_change(Some(spreadsheet()));
        let first = gk.submit().unwrap();
        tick(&mut gk, 30000);

        let second = gk.submit().unwrap();
        assert_ne!(first, second);
        assert!(!gk.complete(first, SubmissionOutcome::Success));
        assert_eq!(gk.state(), SubmissionState::Submitting);
        assert!(!gk.view().submit_enabled);

        assert!(gk.complete(second, SubmissionOutcome::Success));
        assert!(gk.view().submit_enabled);
    }

    #[test]
    fn test_page_without_progress_indicator() {
        let mut gk = Gatekeeper::new(
            GatekeeperConfig::default(),
            MemoryView::without_progress(),
            AlertBoard::new(),
            ManualScheduler::new(),
        );
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();
        assert_eq!(gk.view().progress_visible, None);
        assert!(gk.complete(id, SubmissionOutcome::Success));
    }

    #[test]
    fn test_original_label_is_restored() {
        let mut gk = gatekeeper();
        let custom = ButtonLabel::new("fas fa-drafting-compass", "Generate drawings");
        gk.view_mut().set_submit_label(custom.clone());
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();
        gk.complete(id, SubmissionOutcome::Success);
        assert_eq!(gk.view().submit_label, custom);
    }

    #[test]
    fn test_alerts_expire_unless_permanent() {
        let mut gk = gatekeeper();
        gk.show_alert_with("stays", Severity::Info, true);
        gk.show_alert("goes", Severity::Success);

        tick(&mut gk, 4900);
        assert_eq!(gk.notifier().len(), 2);
        tick(&mut gk, 100);
        assert_eq!(gk.notifier().texts(), vec!["stays"]);
    }

    #[test]
    fn test_manual_dismiss_cancels_expiry() {
        let mut gk = gatekeeper();
        let id = gk.show_alert("closing", Severity::Info);
        assert!(gk.dismiss_alert(id));
        assert!(!gk.scheduler().is_pending(&TimerKey::AlertExpiry(id)));
    }

    #[test]
    fn test_adopted_flash_alerts_follow_same_rules() {
        let mut gk = gatekeeper();
        let flashes: Vec<FlashMessage> = serde_json::from_str(
            r#"[{"message": "File not found", "category": "error"},
                {"message": "Read the manual", "severity": "info", "permanent": true}]"#,
        )
        .unwrap();
        gk.adopt_alerts(flashes);

        tick(&mut gk, 5000);
        assert_eq!(gk.notifier().texts(), vec!["Read the manual"]);
    }

    #[test]
    fn test_dismiss_all_clears_timers() {
        let mut gk = gatekeeper();
        gk.show_alert("a", Severity::Info);
        gk.show_alert("b", Severity::Warning);
        gk.dismiss_all_alerts();
        assert!(gk.notifier().is_empty());
        assert_eq!(gk.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_download_button_resets_after_two_seconds() {
        let mut gk = gatekeeper();
        assert!(gk.begin_download("drawing.dxf"));
        let (label, enabled) = gk.view().button("drawing.dxf").cloned().unwrap();
        assert_eq!(label.text, "Downloading...");
        assert!(!enabled);

        tick(&mut gk, 2000);
        let (label, enabled) = gk.view().button("drawing.dxf").cloned().unwrap();
        assert_eq!(label.text, "Download");
        assert!(enabled);

        assert!(!gk.begin_download("missing.pdf"));
    }

    #[test]
    fn test_repeated_download_keeps_original_label() {
        let mut gk = gatekeeper();
        gk.begin_download("drawing.dxf");
        tick(&mut gk, 1500);
        gk.begin_download("drawing.dxf");

        // first timer was replaced, so nothing resets at t=2s
        tick(&mut gk, 500);
        assert!(!gk.view().button("drawing.dxf").unwrap().1);

        tick(&mut gk, 1500);
        assert_eq!(gk.view().button("drawing.dxf").unwrap().0.text, "Download");
    }

    #[test]
    fn test_restore_keeps_disabled_button_disabled() {
        let mut gk = gatekeeper();
        gk.view_mut()
            .buttons
            .insert("report.pdf".into(), (ButtonLabel::new("fas fa-download", "Report"), false));

        gk.begin_download("report.pdf");
        tick(&mut gk, 1000);
        gk.begin_download("report.pdf");
        tick(&mut gk, 2000);

        let (label, enabled) = gk.view().button("report.pdf").cloned().unwrap();
        assert_eq!(label.text, "Report");
        assert!(!enabled);
    }

    #[test]
    fn test_copy_feedback() {
        let mut gk = gatekeeper();
        gk.view_mut()
            .buttons
            .insert("scale1".into(), (ButtonLabel::new("fas fa-copy", ""), true));

        gk.copy_finished("scale1", Ok(())).unwrap();
        assert_eq!(gk.view().button("scale1").unwrap().0, ButtonLabel::copied());
        tick(&mut gk, 1500);
        assert_eq!(gk.view().button("scale1").unwrap().0.icon, "fas fa-copy");
    }

    #[test]
    fn test_copy_failure_alerts() {
        let mut gk = gatekeeper();
        let err = gk.copy_finished("scale1", Err("NotAllowedError".into())).unwrap_err();
        assert!(matches!(err, UploadError::ClipboardWriteFailure(_)));
        let alert = &gk.notifier().alerts()[0];
        assert_eq!(alert.text, "Failed to copy to clipboard");
        assert_eq!(alert.severity, Severity::Danger);
    }

    #[cfg(feature = "tokio")]
    #[tokio::test(start_paused = true)]
    async fn test_watchdog_with_tokio_timers() {
        use crate::schedule::TokioScheduler;

        let (scheduler, mut fired) = TokioScheduler::new();
        let mut gk = Gatekeeper::new(GatekeeperConfig::default(), MemoryView::new(), AlertBoard::new(), scheduler);
        gk.on_file_change(Some(spreadsheet()));
        let id = gk.submit().unwrap();

        let key = fired.recv().await.unwrap();
        assert_eq!(key, TimerKey::Watchdog(id));
        gk.on_timer(key);

        assert!(gk.view().submit_enabled);
        assert!(!gk.complete(id, SubmissionOutcome::Success));
    }
}
