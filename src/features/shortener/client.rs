//! Shortlink creation against the backend. The page talks to an
//! [`ShortlinkApi`] so the create/refuse classification can be exercised with
//! an in-memory backend.

use super::{
    types::{CreatedEnvelope, CreatedShortlink, ErrorEnvelope, Submission},
    validation::ValidatedSubmission,
};
use crate::app_lib::{AppError, JsonReply};

/// Transport for `POST <create path>`.
#[allow(async_fn_in_trait)]
pub trait ShortlinkApi {
    /// Sends the submission and returns the reply whatever its status.
    async fn post_submission(&self, submission: &Submission) -> Result<JsonReply, AppError>;
}

/// How the backend answered a creation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateReply {
    Created(CreatedShortlink),
    Refused { code: String },
}

/// Submits a validated form. Replies that carry neither envelope surface as
/// `AppError`.
pub async fn create_shortlink<A: ShortlinkApi>(
    api: &A,
    validated: &ValidatedSubmission,
) -> Result<CreateReply, AppError> {
    tracing::debug!(
        kind = validated.kind.as_str(),
        vanity = validated.submission.slug.is_some(),
        protected = validated.submission.has_password(),
        "submitting shortlink"
    );
    let reply = api.post_submission(&validated.submission).await?;
    classify_reply(reply)
}

pub(crate) fn classify_reply(reply: JsonReply) -> Result<CreateReply, AppError> {
    if reply.ok() {
        let Some(body) = reply.body else {
            return Err(AppError::Parse("Missing shortlink in response".to_string()));
        };
        let envelope: CreatedEnvelope = serde_json::from_value(body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;
        return Ok(CreateReply::Created(envelope.data));
    }

    match reply
        .body
        .clone()
        .and_then(|body| serde_json::from_value::<ErrorEnvelope>(body).ok())
    {
        Some(envelope) => Ok(CreateReply::Refused {
            code: envelope.error.code,
        }),
        None => Err(reply.into_http_error()),
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::HttpShortlinkApi;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::ShortlinkApi;
    use crate::{
        app_lib::{AppError, JsonReply, config::AppConfig, post_json},
        features::shortener::types::Submission,
    };

    /// Posts to the configured creation path.
    #[derive(Clone, Debug)]
    pub struct HttpShortlinkApi {
        create_path: String,
    }

    impl HttpShortlinkApi {
        pub fn new(config: &AppConfig) -> Self {
            Self {
                create_path: config.create_path.clone(),
            }
        }
    }

    impl ShortlinkApi for HttpShortlinkApi {
        async fn post_submission(&self, submission: &Submission) -> Result<JsonReply, AppError> {
            post_json(&self.create_path, submission).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateReply, classify_reply};
    use crate::app_lib::{AppError, JsonReply};
    use serde_json::json;

    #[test]
    fn created_reply_yields_the_slug() {
        let reply = JsonReply::new(201, Some(json!({"data": {"slug": "Ab3d"}})));
        match classify_reply(reply).unwrap() {
            CreateReply::Created(created) => assert_eq!(created.slug, "Ab3d"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn error_envelope_yields_the_code() {
        let reply = JsonReply::new(400, Some(json!({"error": {"code": "SLUG_TAKEN"}})));
        assert_eq!(
            classify_reply(reply).unwrap(),
            CreateReply::Refused {
                code: "SLUG_TAKEN".to_string()
            }
        );
    }

    #[test]
    fn success_without_data_is_a_parse_error() {
        let reply = JsonReply::new(201, Some(json!({"ok": true})));
        assert!(matches!(classify_reply(reply), Err(AppError::Parse(_))));

        let empty = JsonReply::new(201, None);
        assert!(matches!(classify_reply(empty), Err(AppError::Parse(_))));
    }

    #[test]
    fn failure_without_error_envelope_is_an_http_error() {
        let reply = JsonReply::new(502, None);
        assert_eq!(classify_reply(reply).unwrap_err().status(), Some(502));
    }
}
