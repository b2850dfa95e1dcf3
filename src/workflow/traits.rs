// Collaborator seams for dependency injection - the workflow consumes these,
// it does not implement them

use std::sync::Arc;

use async_trait::async_trait;

use crate::upload::types::{EditRequest, UploadOutcome};
use crate::workflow::navigation::FilterPanelKind;

/// Remote wiki upload interface
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload one edit attempt. Single attempt per call, no retry built in.
    /// Transport faults must come back in-band as `Server`/`Unknown`
    /// failures; there is no second error channel.
    async fn upload(&self, request: &EditRequest) -> UploadOutcome;
}

/// Alert and chrome surface interface. All calls are fire-and-forget; the
/// workflow never consumes a return value from its presenter.
pub trait Presenter: Send + Sync {
    /// Show a status banner. Sticky banners stay up until dismissed.
    fn show_status(&self, message: &str, sticky: bool);

    /// Show an error alert.
    fn show_error(&self, message: &str, sticky: bool);

    /// Tear down any visible alerts.
    fn dismiss_alerts(&self);

    /// Present the abuse-filter panel in warning or disallow styling.
    fn present_filter_panel(&self, kind: FilterPanelKind);

    /// Move input focus to the captcha solution field.
    fn focus_captcha_input(&self);
}

/// Completion interface: notified exactly once per workflow, and only when
/// an upload succeeds. Failures that lead to a retry-capable mode never
/// reach the delegate.
pub trait SaveDelegate: Send + Sync {
    fn submission_saved(&self, new_revision_id: u64);
}

#[async_trait]
impl<T: Uploader + ?Sized> Uploader for Arc<T> {
    async fn upload(&self, request: &EditRequest) -> UploadOutcome {
        (**self).upload(request).await
    }
}

impl<T: Presenter + ?Sized> Presenter for Arc<T> {
    fn show_status(&self, message: &str, sticky: bool) {
        (**self).show_status(message, sticky);
    }

    fn show_error(&self, message: &str, sticky: bool) {
        (**self).show_error(message, sticky);
    }

    fn dismiss_alerts(&self) {
        (**self).dismiss_alerts();
    }

    fn present_filter_panel(&self, kind: FilterPanelKind) {
        (**self).present_filter_panel(kind);
    }

    fn focus_captcha_input(&self) {
        (**self).focus_captcha_input();
    }
}
