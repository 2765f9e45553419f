//! Unlock request for a password-protected shortlink.

use super::{
    credentials::{basic_authorization, protected_path},
    outcome::{ChallengeOutcome, classify_reply},
};
use crate::app_lib::{AppError, JsonReply};

/// Transport for `GET /{slug}` with an `Authorization` header.
#[allow(async_fn_in_trait)]
pub trait ProtectedContentApi {
    async fn fetch_protected(&self, path: &str, authorization: &str)
    -> Result<JsonReply, AppError>;
}

/// Sends exactly one unlock request for the slug in `pathname`.
pub async fn unlock<A: ProtectedContentApi>(
    api: &A,
    pathname: &str,
    password: &str,
) -> Result<ChallengeOutcome, AppError> {
    let path = protected_path(pathname);
    let reply = api
        .fetch_protected(&path, &basic_authorization(password))
        .await?;
    let outcome = classify_reply(reply)?;

    match &outcome {
        ChallengeOutcome::Unhandled { status } => {
            tracing::warn!(path = %path, status, "unexpected unlock status");
        }
        ChallengeOutcome::InvalidPassword => tracing::info!(path = %path, "password rejected"),
        ChallengeOutcome::Redirect(_) | ChallengeOutcome::Reveal(_) => {
            tracing::info!(path = %path, "shortlink unlocked");
        }
    }

    Ok(outcome)
}

#[cfg(target_arch = "wasm32")]
pub use browser::HttpProtectedContentApi;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::ProtectedContentApi;
    use crate::app_lib::{AppError, JsonReply, get_json_with_headers};

    #[derive(Clone, Copy, Debug, Default)]
    pub struct HttpProtectedContentApi;

    impl ProtectedContentApi for HttpProtectedContentApi {
        async fn fetch_protected(
            &self,
            path: &str,
            authorization: &str,
        ) -> Result<JsonReply, AppError> {
            let headers = vec![("Authorization".to_string(), authorization.to_string())];
            get_json_with_headers(path, &headers).await
        }
    }
}
