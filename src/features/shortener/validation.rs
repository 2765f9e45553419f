//! Local checks that run before anything is sent. Each mirrors a backend rule so
//! an obviously invalid submission never costs a round trip.

use super::{
    content::{ContentKind, classify},
    error_codes::{ErrorCode, ErrorSlot},
    types::Submission,
};
use std::fmt;

/// Minimum password length in bytes, matching the backend's check.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Why a submission was refused before any request was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    MalformedContent,
    PasswordTooShort,
}

impl Rejection {
    pub fn slot(self) -> ErrorSlot {
        match self {
            Rejection::MalformedContent => ErrorSlot::Workflow,
            Rejection::PasswordTooShort => ErrorSlot::Password,
        }
    }

    /// Uses the same wording as the matching backend code.
    pub fn message(self) -> &'static str {
        match self {
            Rejection::MalformedContent => ErrorCode::ContentMalformed.message(),
            Rejection::PasswordTooShort => ErrorCode::PasswordTooShort.message(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for Rejection {}

/// A submission that passed local checks, with its derived kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub submission: Submission,
    pub kind: ContentKind,
}

/// Classifies the content first, then checks the password length.
pub fn validate(submission: Submission) -> Result<ValidatedSubmission, Rejection> {
    let kind = classify(&submission.content).ok_or(Rejection::MalformedContent)?;

    if let Some(password) = &submission.password {
        if password.len() < PASSWORD_MIN_LENGTH {
            return Err(Rejection::PasswordTooShort);
        }
    }

    Ok(ValidatedSubmission { submission, kind })
}

#[cfg(test)]
mod tests {
    use super::{PASSWORD_MIN_LENGTH, Rejection, validate};
    use crate::features::shortener::{
        content::ContentKind, error_codes::ErrorSlot, types::Submission,
    };

    #[test]
    fn url_without_password_is_accepted() {
        let validated = validate(Submission::from_fields("https://example.com", "", "")).unwrap();
        assert_eq!(validated.kind, ContentKind::Url);
        assert_eq!(validated.submission.password, None);
    }

    #[test]
    fn malformed_content_is_rejected_into_the_workflow_field() {
        let err = validate(Submission::from_fields("not a link", "", "")).unwrap_err();
        assert_eq!(err, Rejection::MalformedContent);
        assert_eq!(err.slot(), ErrorSlot::Workflow);
        assert_eq!(err.to_string(), "Malformed content!");
    }

    #[test]
    fn short_password_is_rejected_into_the_password_field() {
        let err = validate(Submission::from_fields(r#"{"a":1}"#, "", "short")).unwrap_err();
        assert_eq!(err, Rejection::PasswordTooShort);
        assert_eq!(err.slot(), ErrorSlot::Password);
        assert_eq!(err.message(), "Too short! Min 8 chars");
    }

    #[test]
    fn password_length_boundary() {
        let seven = "a".repeat(PASSWORD_MIN_LENGTH - 1);
        let eight = "a".repeat(PASSWORD_MIN_LENGTH);
        assert!(validate(Submission::from_fields("https://example.com", "", &seven)).is_err());
        assert!(validate(Submission::from_fields("https://example.com", "", &eight)).is_ok());
    }

    #[test]
    fn password_length_counts_bytes() {
        // Four characters, sixteen bytes.
        let password = "🔒🔒🔒🔒";
        assert!(validate(Submission::from_fields("https://example.com", "", password)).is_ok());
    }

    #[test]
    fn content_is_checked_before_password() {
        let err = validate(Submission::from_fields("nope", "", "short")).unwrap_err();
        assert_eq!(err, Rejection::MalformedContent);
    }

    #[test]
    fn password_message_names_the_minimum() {
        assert!(
            Rejection::PasswordTooShort
                .message()
                .contains(&PASSWORD_MIN_LENGTH.to_string())
        );
    }
}
