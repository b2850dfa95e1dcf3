// Core types for wikitext edit uploads

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Target of an edit: the article being modified and the section within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTarget {
    pub article_url: Url,
    pub section_id: String,
}

/// One edit attempt, snapshotted at submission time.
///
/// Never mutated after construction; a retry builds a fresh request from the
/// workflow's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    pub article_url: Url,
    pub section_id: String,
    pub wikitext: String,
    pub summary: String,
    pub is_minor_edit: bool,
    pub add_to_watchlist: bool,
    pub captcha_id: Option<String>,
    pub captcha_solution: Option<String>,
}

/// Result of a single upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { new_revision_id: u64 },
    Failure(UploadError),
}

/// Classified upload failure.
///
/// Each variant carries the kind-specific payload the server reported.
/// Transport faults have no variant of their own: uploader implementations
/// fold them into `Server` or `Unknown` so the workflow sees a single
/// failure channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("the wiki requires a captcha to publish this edit")]
    NeedsCaptcha { captcha_id: String, captcha_url: String },
    #[error("edit disallowed by abuse filter ({code})")]
    AbuseFilterDisallowed { code: String },
    #[error("edit triggered an abuse filter warning ({code})")]
    AbuseFilterWarning { code: String },
    #[error("edit flagged by abuse filter ({code})")]
    AbuseFilterOther { code: String },
    #[error("the wiki reported a server error: {message}")]
    Server { message: String },
    #[error("edit could not be published: {message}")]
    Unknown { message: String },
}

/// Captcha challenge issued by the wiki.
///
/// The solution is filled in as the user types; id and image URL are fixed
/// at construction. The workflow discards the challenge when it leaves
/// captcha mode or a replacement challenge arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaChallenge {
    pub captcha_id: String,
    pub image_url: Url,
    pub solution: String,
}

impl CaptchaChallenge {
    /// Build a challenge from the raw id and URL the server reported.
    pub fn from_parts(captcha_id: &str, image_url: &str) -> Result<Self, MalformedChallengeError> {
        let image_url = Url::parse(image_url).map_err(|source| MalformedChallengeError {
            url: image_url.to_string(),
            source,
        })?;
        Ok(Self {
            captcha_id: captcha_id.to_string(),
            image_url,
            solution: String::new(),
        })
    }

    pub fn has_solution(&self) -> bool {
        !self.solution.is_empty()
    }
}

/// The server handed back a captcha challenge whose image URL does not
/// parse. The one place malformed server data must be surfaced rather than
/// swallowed.
#[derive(Debug, Error)]
#[error("captcha challenge URL is not parseable: {url:?}")]
pub struct MalformedChallengeError {
    pub url: String,
    #[source]
    pub source: url::ParseError,
}

/// Caller defect: `submit` was invoked before an edit target (article +
/// section) was resolved. Fatal, never user-recoverable.
#[derive(Debug, Error)]
#[error("no resolvable edit target (article + section) for submission")]
pub struct MissingTargetError;
