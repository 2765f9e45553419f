//! Classification of the unlock reply.

use crate::app_lib::{AppError, JsonReply};
use serde_json::Value;

/// What the page does after an unlock attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum ChallengeOutcome {
    /// URL shortlink: navigate the browser to the target.
    Redirect(String),
    /// Workflow shortlink: show the document in a new tab.
    Reveal(Value),
    /// Wrong password (401).
    InvalidPassword,
    /// Any status other than 200 or 401. Nothing changes on the page.
    Unhandled { status: u16 },
}

pub(crate) fn classify_reply(reply: JsonReply) -> Result<ChallengeOutcome, AppError> {
    match reply.status {
        200 => {
            let body = reply
                .body
                .ok_or_else(|| AppError::Parse("Unlocked content is not JSON".to_string()))?;
            Ok(match redirect_target(&body) {
                Some(url) => ChallengeOutcome::Redirect(url.to_string()),
                None => ChallengeOutcome::Reveal(body),
            })
        }
        401 => Ok(ChallengeOutcome::InvalidPassword),
        status => Ok(ChallengeOutcome::Unhandled { status }),
    }
}

/// A non-empty string `url` field marks a redirect.
fn redirect_target(body: &Value) -> Option<&str> {
    body.get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

/// Pretty-printed document opened for a revealed workflow, keys in server order.
pub fn reveal_document(body: &Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(body)
        .map_err(|err| AppError::Serialization(format!("Failed to format workflow: {err}")))
}
