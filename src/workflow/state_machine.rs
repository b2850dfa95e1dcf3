// Edit-submission workflow: owns the navigation mode, drives a single
// wikitext upload at a time, classifies the result, and decides the next
// mode and presenter action.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::Instrument;

use crate::config::WorkflowConfig;
use crate::telemetry::{generate_correlation_id, submission_span};
use crate::upload::types::{
    CaptchaChallenge, EditRequest, EditTarget, MissingTargetError, UploadError, UploadOutcome,
};
use crate::workflow::navigation::{
    BackAction, FilterPanelKind, NavigationControls, NavigationMode,
};
use crate::workflow::traits::{Presenter, SaveDelegate, Uploader};

/// Handle that outlives the workflow borrow. When the owning screen goes
/// away while an upload is pending, dismissing through the handle makes the
/// workflow discard the late outcome instead of driving a dead UI.
#[derive(Debug, Clone)]
pub struct DismissalHandle {
    live: Arc<AtomicBool>,
}

impl DismissalHandle {
    pub fn dismiss(&self) {
        self.live.store(false, Ordering::SeqCst);
    }
}

/// Drives one edit submission from preview through captcha and abuse-filter
/// detours to a published revision.
///
/// The uploader and presenter are injected; the workflow owns all mutable
/// state and issues at most one upload at a time.
pub struct EditSubmissionWorkflow<U: Uploader, P: Presenter> {
    uploader: U,
    presenter: P,
    delegate: Option<Arc<dyn SaveDelegate>>,
    config: WorkflowConfig,
    correlation_id: String,

    target: Option<EditTarget>,
    wikitext: String,
    summary: String,
    minor_edit: bool,
    add_to_watchlist: bool,

    mode: NavigationMode,
    controls: NavigationControls,
    abuse_filter_code: String,
    captcha: Option<CaptchaChallenge>,

    upload_in_flight: bool,
    finished: bool,
    live: Arc<AtomicBool>,
}

impl<U: Uploader, P: Presenter> EditSubmissionWorkflow<U, P> {
    pub fn new(uploader: U, presenter: P, config: WorkflowConfig) -> Self {
        let mode = NavigationMode::Preview;
        Self {
            uploader,
            presenter,
            delegate: None,
            config,
            correlation_id: generate_correlation_id(),
            target: None,
            wikitext: String::new(),
            summary: String::new(),
            minor_edit: false,
            add_to_watchlist: false,
            mode,
            controls: NavigationControls::for_mode(mode),
            abuse_filter_code: String::new(),
            captcha: None,
            upload_in_flight: false,
            finished: false,
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_target(&mut self, target: EditTarget) {
        self.target = Some(target);
    }

    pub fn set_wikitext(&mut self, wikitext: &str) {
        self.wikitext = wikitext.to_string();
    }

    pub fn summary_changed(&mut self, summary: &str) {
        self.summary = summary.to_string();
    }

    pub fn set_minor_edit(&mut self, minor: bool) {
        self.minor_edit = minor;
    }

    pub fn set_add_to_watchlist(&mut self, watch: bool) {
        self.add_to_watchlist = watch;
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn SaveDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn controls(&self) -> &NavigationControls {
        &self.controls
    }

    pub fn abuse_filter_code(&self) -> &str {
        &self.abuse_filter_code
    }

    pub fn captcha_challenge(&self) -> Option<&CaptchaChallenge> {
        self.captcha.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle for the owning screen to dismiss the workflow while an upload
    /// is pending.
    pub fn dismissal_handle(&self) -> DismissalHandle {
        DismissalHandle {
            live: Arc::clone(&self.live),
        }
    }

    /// Explicit mode transition. Recomputes and returns the navigation
    /// controls for the new mode; repeated transitions to the same mode
    /// yield identical controls.
    pub fn transition(&mut self, to: NavigationMode) -> NavigationControls {
        if self.mode != to {
            tracing::debug!(from = ?self.mode, to = ?to, "navigation mode change");
            if self.mode == NavigationMode::Captcha {
                self.captcha = None;
            }
        }
        self.mode = to;
        self.controls = self.recompute_controls();
        self.controls.clone()
    }

    /// Back action for the current mode, for the caller to perform (pop the
    /// screen or dismiss the flow).
    pub fn go_back(&self) -> BackAction {
        if self.mode == NavigationMode::AbuseFilterWarning {
            tracing::info!(code = %self.abuse_filter_code, "backing out of abuse filter warning");
        }
        self.controls.back
    }

    /// Forward action for the current mode. A no-op while an upload is in
    /// flight, after the workflow has completed, or when the forward
    /// control is disabled (disallow mode, unsolved captcha).
    pub async fn go_forward(&mut self) {
        if self.finished || self.upload_in_flight {
            tracing::warn!(mode = ?self.mode, "forward action triggered while unavailable");
            return;
        }
        if !self.controls.forward_enabled {
            tracing::debug!(mode = ?self.mode, "forward action is disabled");
            return;
        }
        match self.mode {
            NavigationMode::Wikitext => {
                self.transition(NavigationMode::Preview);
            }
            NavigationMode::AbuseFilterWarning => {
                tracing::info!(
                    code = %self.abuse_filter_code,
                    "ignoring abuse filter warning and resubmitting"
                );
                self.submit().await;
            }
            NavigationMode::Preview | NavigationMode::Captcha => self.submit().await,
            // No forward action exists in disallow mode.
            NavigationMode::AbuseFilterDisallow => {}
        }
    }

    /// Update the active challenge's solution as the user types. An empty
    /// solution disables the forward action.
    pub fn set_captcha_solution(&mut self, solution: &str) {
        let Some(challenge) = self.captcha.as_mut() else {
            return;
        };
        challenge.solution = solution.to_string();
        self.controls = self.recompute_controls();
    }

    /// Fill in the captcha solution and resubmit. An empty solution never
    /// triggers an upload.
    pub async fn retry_with_captcha_solution(&mut self, solution: &str) {
        self.set_captcha_solution(solution);
        let solved = self
            .captcha
            .as_ref()
            .is_some_and(CaptchaChallenge::has_solution);
        if !solved {
            tracing::debug!("empty captcha solution, not resubmitting");
            return;
        }
        self.submit().await;
    }

    /// Issue one upload for the current edit state.
    ///
    /// Panics when no edit target has been resolved: that is a caller
    /// defect, not a user-recoverable failure.
    pub async fn submit(&mut self) {
        if self.finished {
            tracing::warn!("submit called after workflow completed");
            return;
        }
        if self.upload_in_flight {
            tracing::warn!("submit called while an upload is already in flight");
            return;
        }
        let Some(target) = self.target.clone() else {
            panic!("{}", MissingTargetError);
        };
        let request = self.build_request(&target);

        self.presenter
            .show_status(&self.config.publishing_status_text, true);
        self.upload_in_flight = true;
        self.controls.forward_enabled = false;
        tracing::info!(
            article = %target.article_url,
            section = %target.section_id,
            minor = request.is_minor_edit,
            captcha = request.captcha_id.is_some(),
            correlation.id = %self.correlation_id,
            "publishing wikitext edit"
        );

        let span = submission_span(&target.section_id, &self.correlation_id);
        let outcome = self.uploader.upload(&request).instrument(span).await;

        self.upload_in_flight = false;
        self.controls = self.recompute_controls();
        if !self.live.load(Ordering::SeqCst) {
            tracing::debug!("discarding upload outcome after dismissal");
            return;
        }
        self.handle_outcome(outcome).await;
    }

    async fn handle_outcome(&mut self, outcome: UploadOutcome) {
        match outcome {
            UploadOutcome::Success { new_revision_id } => {
                tracing::info!(revision = new_revision_id, "edit published");
                self.presenter.dismiss_alerts();
                self.finished = true;
                self.controls = self.recompute_controls();
                if let Some(delegate) = self.delegate.take() {
                    delegate.submission_saved(new_revision_id);
                }
            }
            UploadOutcome::Failure(error) => self.handle_upload_error(error).await,
        }
    }

    async fn handle_upload_error(&mut self, error: UploadError) {
        match &error {
            UploadError::NeedsCaptcha {
                captcha_id,
                captcha_url,
            } => {
                if self.mode == NavigationMode::Captcha {
                    tracing::info!("captcha solution rejected, new challenge issued");
                }
                match CaptchaChallenge::from_parts(captcha_id, captcha_url) {
                    Ok(challenge) => {
                        self.presenter.show_error(&error.to_string(), false);
                        self.captcha = Some(challenge);
                        self.transition(NavigationMode::Captcha);
                        tokio::time::sleep(self.config.captcha_focus_delay()).await;
                        if self.live.load(Ordering::SeqCst) {
                            self.presenter.focus_captcha_input();
                        }
                    }
                    Err(err) => {
                        // Malformed server data: generic sticky alert, no
                        // mode transition.
                        tracing::error!(error = %err, "discarding malformed captcha challenge");
                        self.presenter.show_error(&err.to_string(), true);
                    }
                }
            }
            UploadError::AbuseFilterDisallowed { code } => {
                self.abuse_filter_code = code.clone();
                tracing::warn!(code = %code, "edit disallowed by abuse filter");
                self.presenter.show_error(&error.to_string(), true);
                self.transition(NavigationMode::AbuseFilterDisallow);
                self.presenter.present_filter_panel(FilterPanelKind::Disallow);
            }
            UploadError::AbuseFilterWarning { code } | UploadError::AbuseFilterOther { code } => {
                self.abuse_filter_code = code.clone();
                tracing::warn!(code = %code, "edit triggered an abuse filter warning");
                self.presenter.show_error(&error.to_string(), true);
                self.transition(NavigationMode::AbuseFilterWarning);
                self.presenter.present_filter_panel(FilterPanelKind::Warning);
            }
            UploadError::Server { .. } | UploadError::Unknown { .. } => {
                // Mode deliberately unchanged: the user may re-trigger the
                // same request manually.
                tracing::error!(error = %error, "edit upload failed");
                self.presenter.show_error(&error.to_string(), true);
            }
        }
    }

    fn build_request(&self, target: &EditTarget) -> EditRequest {
        EditRequest {
            article_url: target.article_url.clone(),
            section_id: target.section_id.clone(),
            wikitext: self.wikitext.clone(),
            summary: self.summary.clone(),
            is_minor_edit: self.minor_edit,
            add_to_watchlist: self.add_to_watchlist,
            captcha_id: self.captcha.as_ref().map(|c| c.captcha_id.clone()),
            captcha_solution: self.captcha.as_ref().map(|c| c.solution.clone()),
        }
    }

    fn recompute_controls(&self) -> NavigationControls {
        let mut controls = NavigationControls::for_mode(self.mode);
        if self.mode == NavigationMode::Captcha {
            controls.forward_enabled = self
                .captcha
                .as_ref()
                .is_some_and(CaptchaChallenge::has_solution);
        }
        if self.upload_in_flight || self.finished {
            controls.forward_enabled = false;
        }
        controls
    }
}
