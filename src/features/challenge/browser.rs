//! Browser side effects for an unlocked shortlink.

use super::outcome::reveal_document;
use crate::app_lib::AppError;
use js_sys::Array;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Replaces the current page with the shortlink target.
pub fn redirect(url: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Config("Browser window is unavailable.".to_string()))?;
    window
        .location()
        .set_href(url)
        .map_err(|err| AppError::Config(format!("Failed to navigate: {err:?}")))
}

/// Opens the unlocked workflow as a JSON document in a new tab.
pub fn open_in_new_tab(body: &Value) -> Result<(), AppError> {
    let document = reveal_document(body)?;
    let window = web_sys::window()
        .ok_or_else(|| AppError::Config("Browser window is unavailable.".to_string()))?;

    let parts = Array::of1(&JsValue::from_str(&document));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| AppError::Serialization(format!("Failed to build document: {err:?}")))?;
    let object_url = Url::create_object_url_with_blob(&blob)
        .map_err(|err| AppError::Serialization(format!("Failed to build document: {err:?}")))?;

    let opened = window.open_with_url_and_target(&object_url, "_blank");
    if let Err(err) = Url::revoke_object_url(&object_url) {
        tracing::debug!(error = ?err, "failed to revoke object URL");
    }
    opened
        .map(|_| ())
        .map_err(|err| AppError::Config(format!("Failed to open a new tab: {err:?}")))
}
