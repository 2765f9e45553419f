//! Browser client for the shortlink service.
//!
//! Two independent pages share this crate:
//!
//! - the **shortener** page (`/`), which validates a URL or workflow JSON, an
//!   optional vanity slug and an optional password, submits them, and shows a
//!   success modal or routes the backend error code into the right field;
//! - the **challenge** page (`/:slug`), which the backend serves for
//!   password-protected shortlinks and which unlocks the content with a Basic
//!   credential.
//!
//! Flow logic (validation, error routing, modal phases, reply classification)
//! compiles on every target so it can be unit tested on the host. Leptos
//! components, routes and browser bindings only exist on `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Installs console logging and mounts the application to `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::debug!(
        version = app_lib::PKG_VERSION,
        commit = app_lib::GIT_COMMIT_HASH,
        "mounting shortlink-web"
    );

    leptos::prelude::mount_to_body(app::App);
}
