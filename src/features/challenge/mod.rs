//! Challenge flow for password-protected shortlinks. The backend serves the
//! challenge page instead of the content when no credential is sent; the page
//! repeats the request with the entered password as a Basic credential.
//!
//! Flow Overview: Enter in the password field calls `client::unlock` once; a
//! `200` redirects (URL shortlinks) or opens the JSON in a new tab (workflows), a
//! `401` swaps the hint for an invalid-password message, and any other status
//! is logged and otherwise ignored. The password must never be logged.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod client;
pub mod credentials;
pub mod outcome;
pub mod state;

pub use client::{ProtectedContentApi, unlock};
pub use credentials::{basic_authorization, protected_path, slug_from_path};
pub use outcome::ChallengeOutcome;
pub use state::ChallengeState;
