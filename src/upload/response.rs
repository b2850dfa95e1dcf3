// Boundary classification of wiki edit API responses
//
// The server reports failures as opaque string-keyed payloads. Everything
// downstream works with the typed `UploadOutcome`, so the parse happens
// exactly once, here.

use serde_json::Value;

use crate::upload::types::{UploadError, UploadOutcome};

/// Classify a MediaWiki-style `action=edit` response body.
///
/// A structurally malformed payload is never forwarded: a success without a
/// usable `newrevid` and a response carrying neither an edit result nor an
/// error both come back as `Unknown`.
pub fn classify_edit_response(payload: &Value) -> UploadOutcome {
    if let Some(edit) = payload.get("edit") {
        return classify_edit_result(edit);
    }
    if let Some(error) = payload.get("error") {
        return UploadOutcome::Failure(classify_api_error(error));
    }
    UploadOutcome::Failure(UploadError::Unknown {
        message: "response carried neither an edit result nor an error".to_string(),
    })
}

fn classify_edit_result(edit: &Value) -> UploadOutcome {
    match edit.get("result").and_then(Value::as_str) {
        Some("Success") => match edit.get("newrevid").and_then(Value::as_u64) {
            Some(new_revision_id) => UploadOutcome::Success { new_revision_id },
            None => UploadOutcome::Failure(UploadError::Unknown {
                message: "success result missing a usable newrevid".to_string(),
            }),
        },
        _ => {
            if let Some(captcha) = edit.get("captcha") {
                return UploadOutcome::Failure(UploadError::NeedsCaptcha {
                    captcha_id: field_as_string(captcha, "id"),
                    captcha_url: field_as_string(captcha, "url"),
                });
            }
            UploadOutcome::Failure(UploadError::Unknown {
                message: format!(
                    "edit result was {:?}",
                    edit.get("result").and_then(Value::as_str).unwrap_or("absent")
                ),
            })
        }
    }
}

fn classify_api_error(error: &Value) -> UploadError {
    let code = error.get("code").and_then(Value::as_str).unwrap_or("");
    let info = error
        .get("info")
        .and_then(Value::as_str)
        .unwrap_or("the wiki rejected the edit")
        .to_string();

    if code.starts_with("abusefilter") {
        let code = code.to_string();
        return if code.contains("disallow") {
            UploadError::AbuseFilterDisallowed { code }
        } else if code.contains("warning") {
            UploadError::AbuseFilterWarning { code }
        } else {
            UploadError::AbuseFilterOther { code }
        };
    }

    if code.starts_with("internal_api_error") || code == "readonly" {
        return UploadError::Server { message: info };
    }

    UploadError::Unknown { message: info }
}

// Captcha ids arrive as a string or a bare number depending on the wiki's
// captcha backend.
fn field_as_string(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
