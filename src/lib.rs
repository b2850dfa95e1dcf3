// Pagepress Library - Wiki Edit-Submission Workflow
// This exposes the core components for embedding and testing

pub mod config;
pub mod telemetry;
pub mod upload;
pub mod workflow;

// Re-export key types for easy access
pub use config::{config, init_config, ObservabilityConfig, PagepressConfig, WorkflowConfig};
pub use telemetry::{generate_correlation_id, init_telemetry, submission_span};
pub use upload::{
    classify_edit_response, CaptchaChallenge, EditRequest, EditTarget, MalformedChallengeError,
    MissingTargetError, UploadError, UploadOutcome,
};
pub use workflow::{
    BackAction, DismissalHandle, EditSubmissionWorkflow, FilterPanelKind, ForwardAction,
    NavigationControls, NavigationMode, Presenter, SaveDelegate, Uploader,
};
