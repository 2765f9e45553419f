//! Shared frontend utilities for API access, configuration, errors, modal
//! phases, and build metadata.
//!
//! ## Backend Exchanges
//!
//! ### Shortlink creation
//!
//! 1. **Submit:** The shortener page POSTs `{content, slug?, password?}` as JSON to
//!    the configured creation path (`/shortlink` by default).
//! 2. **Created:** A 2xx reply carries `{data: {slug}}`; the page renders
//!    `{public_base_url}/{slug}` in the success modal.
//! 3. **Refused:** Any other reply carries `{error: {code}}`; the code is routed to
//!    the vanity-URL or workflow field, or dropped when no field owns it.
//!
//! ### Protected shortlinks
//!
//! 1. **Challenge:** The backend serves the challenge page for `GET /{slug}` when
//!    the shortlink has a password and no `Authorization` header was sent.
//! 2. **Unlock:** The page repeats `GET /{slug}` with
//!    `Authorization: Basic base64(password)`.
//! 3. **Result:** `200` returns `{url}` for URL shortlinks or the workflow JSON
//!    itself; `401` means the password was wrong.
//!
//! Passwords pass through these helpers as header values or request bodies and
//! must never be logged.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod modal;

pub const PKG_VERSION: &str = built_info::PKG_VERSION;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub use api::JsonReply;
#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json_with_headers, post_json};
pub use errors::AppError;
pub use modal::ModalPhase;
