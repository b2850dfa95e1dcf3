// Mock implementations for testing - no side effects

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::upload::types::{EditRequest, UploadError, UploadOutcome};
use crate::workflow::navigation::FilterPanelKind;
use crate::workflow::traits::{Presenter, SaveDelegate, Uploader};

/// Mock uploader that replays scripted outcomes in order and journals every
/// request it receives.
#[derive(Debug, Default)]
pub struct MockUploader {
    outcomes: Mutex<VecDeque<UploadOutcome>>,
    requests: Mutex<Vec<EditRequest>>,
}

impl MockUploader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_outcome(&self, outcome: UploadOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn uploaded_requests(&self) -> Vec<EditRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Uploader for MockUploader {
    async fn upload(&self, request: &EditRequest) -> UploadOutcome {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(UploadOutcome::Failure(UploadError::Unknown {
                message: "mock uploader ran out of scripted outcomes".to_string(),
            }))
    }
}

/// Presenter call journal entry, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Status { message: String, sticky: bool },
    Error { message: String, sticky: bool },
    DismissAlerts,
    FilterPanel(FilterPanelKind),
    FocusCaptchaInput,
}

/// Mock presenter that records every call.
#[derive(Debug, Default)]
pub struct MockPresenter {
    calls: Mutex<Vec<PresenterCall>>,
}

impl MockPresenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn recorded_calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn error_alerts(&self) -> Vec<(String, bool)> {
        self.recorded_calls()
            .into_iter()
            .filter_map(|call| match call {
                PresenterCall::Error { message, sticky } => Some((message, sticky)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Presenter for MockPresenter {
    fn show_status(&self, message: &str, sticky: bool) {
        self.calls.lock().unwrap().push(PresenterCall::Status {
            message: message.to_string(),
            sticky,
        });
    }

    fn show_error(&self, message: &str, sticky: bool) {
        self.calls.lock().unwrap().push(PresenterCall::Error {
            message: message.to_string(),
            sticky,
        });
    }

    fn dismiss_alerts(&self) {
        self.calls.lock().unwrap().push(PresenterCall::DismissAlerts);
    }

    fn present_filter_panel(&self, kind: FilterPanelKind) {
        self.calls
            .lock()
            .unwrap()
            .push(PresenterCall::FilterPanel(kind));
    }

    fn focus_captcha_input(&self) {
        self.calls.lock().unwrap().push(PresenterCall::FocusCaptchaInput);
    }
}

/// Mock completion delegate that records every saved revision.
#[derive(Debug, Default)]
pub struct MockSaveDelegate {
    revisions: Mutex<Vec<u64>>,
}

impl MockSaveDelegate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn saved_revisions(&self) -> Vec<u64> {
        self.revisions.lock().unwrap().clone()
    }
}

impl SaveDelegate for MockSaveDelegate {
    fn submission_saved(&self, new_revision_id: u64) {
        self.revisions.lock().unwrap().push(new_revision_id);
    }
}
