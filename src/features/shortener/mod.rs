//! Shortener flow: classify the content as a URL or workflow JSON, apply the
//! local checks that mirror backend rules, submit, then either celebrate or
//! route the backend error code to the field that owns it.
//!
//! Flow Overview: `ShortenerState::prepare` validates and short-circuits with a
//! field error; `client::create_shortlink` posts the payload and classifies the
//! reply; `ShortenerState::apply_error_code` displays refusals; the success
//! modal uses `SuccessCopy` for its wording. Passwords are part of the payload
//! and must never be logged.

pub mod client;
pub mod confetti;
pub mod content;
pub mod error_codes;
pub mod state;
pub mod success;
pub mod types;
pub mod validation;

pub use client::{CreateReply, ShortlinkApi, create_shortlink};
pub use content::{ContentKind, classify};
pub use error_codes::{ErrorCode, ErrorSlot, ServerErrorRoute, route_error_code};
pub use state::ShortenerState;
pub use success::SuccessCopy;
pub use types::Submission;
pub use validation::{PASSWORD_MIN_LENGTH, Rejection, ValidatedSubmission};
