//! HTTP helpers for the shortlink backend with a consistent timeout and reply
//! shape. Both flows need the status code *and* the JSON body of non-2xx replies
//! (error codes, 401 challenges), so the helpers hand back a [`JsonReply`]
//! instead of collapsing failures into an error. Only transport problems become
//! [`AppError`]. Callers attach credentials through headers; nothing here stores
//! or logs them.

use super::errors::AppError;
use serde_json::Value;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters carried in `AppError::Http`.
const MAX_ERROR_CHARS: usize = 200;

/// Status and decoded JSON body of a completed exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonReply {
    pub status: u16,
    /// `None` when the body was empty or not valid JSON.
    pub body: Option<Value>,
}

impl JsonReply {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts a reply without a usable body into an `AppError::Http`.
    pub fn into_http_error(self) -> AppError {
        let message = self
            .body
            .map(|body| sanitize_body(&body.to_string()))
            .unwrap_or_else(|| sanitize_body(""));
        AppError::Http {
            status: self.status,
            message,
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Decodes a reply body leniently: blank or malformed bodies become `None`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn decode_body(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "reply body is not JSON");
            None
        }
    }
}

/// Sanitizes error bodies for diagnostics by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{get_json_with_headers, post_json};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{DEFAULT_TIMEOUT_MS, JsonReply, build_url_with_base, decode_body};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use serde::Serialize;
    use serde_json::to_string;
    use web_sys::AbortController;

    /// Posts a JSON body and returns the reply whatever its status.
    pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<JsonReply, AppError> {
        let url = build_url(path);
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = send_with_timeout(move |signal| {
            Request::post(&url)
                .header("Content-Type", "application/json")
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        read_reply(response).await
    }

    /// Issues a GET with custom headers and returns the reply whatever its status.
    pub async fn get_json_with_headers(
        path: &str,
        headers: &[(String, String)],
    ) -> Result<JsonReply, AppError> {
        let url = build_url(path);
        let response = send_with_timeout(move |signal| {
            let mut builder = Request::get(&url).abort_signal(Some(signal));

            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            builder
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        read_reply(response).await
    }

    /// Builds a URL from the configured API base URL and the provided path.
    fn build_url(path: &str) -> String {
        let config = AppConfig::load();
        build_url_with_base(&config.api_base_url, path)
    }

    /// Maps network errors into `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout so a hung backend cannot pin the UI.
    async fn send_with_timeout(
        build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    async fn read_reply(response: Response) -> Result<JsonReply, AppError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;
        Ok(JsonReply::new(status, decode_body(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonReply, build_url_with_base, decode_body};
    use crate::app_lib::AppError;
    use serde_json::json;

    #[test]
    fn build_url_with_base_joins_without_duplicate_slashes() {
        assert_eq!(
            build_url_with_base("https://n8n.to/", "/shortlink"),
            "https://n8n.to/shortlink"
        );
        assert_eq!(
            build_url_with_base("https://n8n.to", "abc123"),
            "https://n8n.to/abc123"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_relative_path() {
        assert_eq!(build_url_with_base("", "/shortlink"), "/shortlink");
        assert_eq!(build_url_with_base("   ", " /abc123 "), "/abc123");
    }

    #[test]
    fn decode_body_tolerates_blank_and_invalid_json() {
        assert_eq!(decode_body(""), None);
        assert_eq!(decode_body("  \n"), None);
        assert_eq!(decode_body("Unauthorized"), None);
        assert_eq!(
            decode_body(r#"{"error":{"code":"SLUG_TAKEN"}}"#),
            Some(json!({"error": {"code": "SLUG_TAKEN"}}))
        );
    }

    #[test]
    fn ok_covers_every_2xx_status() {
        assert!(JsonReply::new(200, None).ok());
        assert!(JsonReply::new(201, None).ok());
        assert!(!JsonReply::new(199, None).ok());
        assert!(!JsonReply::new(301, None).ok());
        assert!(!JsonReply::new(401, None).ok());
    }

    #[test]
    fn into_http_error_truncates_long_bodies() {
        let long = "x".repeat(500);
        let err = JsonReply::new(500, Some(json!(long))).into_http_error();
        match err {
            AppError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.chars().count(), 200);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn into_http_error_without_body_uses_placeholder() {
        let err = JsonReply::new(503, None).into_http_error();
        assert_eq!(
            err,
            AppError::Http {
                status: 503,
                message: "Request failed.".to_string()
            }
        );
    }
}
