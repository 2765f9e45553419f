//! Basic credential and request path for unlocking a protected shortlink.

use base64::{Engine, engine::general_purpose::STANDARD};

/// `Authorization` value for a password: `Basic` + standard base64 of the raw
/// password bytes, with no `user:` prefix.
pub fn basic_authorization(password: &str) -> String {
    format!("Basic {}", STANDARD.encode(password.as_bytes()))
}

/// Last segment of a page path: the slug being unlocked.
pub fn slug_from_path(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or_default()
}

/// Path the unlock request is sent to.
pub fn protected_path(pathname: &str) -> String {
    format!("/{}", slug_from_path(pathname))
}
