pub mod response;
pub mod types;

pub use response::classify_edit_response;
pub use types::{
    CaptchaChallenge, EditRequest, EditTarget, MalformedChallengeError, MissingTargetError,
    UploadError, UploadOutcome,
};
