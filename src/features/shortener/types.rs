//! Request and response types for the shortlink creation endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /shortlink`. Optional fields are omitted, never sent empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Submission {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Submission {
    /// Builds a submission from raw field values, dropping empty ones.
    pub fn from_fields(content: &str, slug: &str, password: &str) -> Self {
        Self {
            content: content.to_string(),
            slug: non_empty(slug),
            password: non_empty(password),
        }
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Success envelope: `{"data": {...}}`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedEnvelope {
    pub data: CreatedShortlink,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedShortlink {
    pub slug: String,
}

/// Failure envelope: `{"error": {"code": "..."}}`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::{CreatedEnvelope, ErrorEnvelope, Submission};
    use serde_json::json;

    #[test]
    fn empty_fields_are_omitted_from_the_payload() {
        let submission = Submission::from_fields("https://example.com", "", "");
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({"content": "https://example.com"})
        );
        assert!(!submission.has_password());
    }

    #[test]
    fn present_fields_are_sent_verbatim() {
        let submission = Submission::from_fields(r#"{"a":1}"#, "my-flow", "correct horse");
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "content": r#"{"a":1}"#,
                "slug": "my-flow",
                "password": "correct horse"
            })
        );
        assert!(submission.has_password());
    }

    #[test]
    fn envelopes_ignore_extra_fields() {
        let created: CreatedEnvelope = serde_json::from_value(json!({
            "data": {"slug": "abcd", "kind": "url", "content": "https://example.com"}
        }))
        .unwrap();
        assert_eq!(created.data.slug, "abcd");

        let refused: ErrorEnvelope = serde_json::from_value(json!({
            "error": {"code": "SLUG_TAKEN", "message": "custom slug is already taken"}
        }))
        .unwrap();
        assert_eq!(refused.error.code, "SLUG_TAKEN");
    }
}
