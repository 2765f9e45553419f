//! Backend error codes, their user-facing messages, and the form field that
//! displays each of them.

use std::fmt;

/// Codes the backend returns in `{"error": {"code": ...}}` that have a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ContentMalformed,
    SlugTaken,
    SlugReserved,
    SlugTooShort,
    SlugTooLong,
    SlugMisformatted,
    PasswordTooShort,
    PayloadTooLarge,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::ContentMalformed,
        ErrorCode::SlugTaken,
        ErrorCode::SlugReserved,
        ErrorCode::SlugTooShort,
        ErrorCode::SlugTooLong,
        ErrorCode::SlugMisformatted,
        ErrorCode::PasswordTooShort,
        ErrorCode::PayloadTooLarge,
    ];

    /// Looks up a wire code. Unknown codes have no message.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ContentMalformed => "CONTENT_MALFORMED",
            ErrorCode::SlugTaken => "SLUG_TAKEN",
            ErrorCode::SlugReserved => "SLUG_RESERVED",
            ErrorCode::SlugTooShort => "SLUG_TOO_SHORT",
            ErrorCode::SlugTooLong => "SLUG_TOO_LONG",
            ErrorCode::SlugMisformatted => "SLUG_MISFORMATTED",
            ErrorCode::PasswordTooShort => "PASSWORD_TOO_SHORT",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ContentMalformed => "Malformed content!",
            ErrorCode::SlugTaken => "Taken! Try another",
            ErrorCode::SlugReserved => "Reserved! Try another",
            ErrorCode::SlugTooShort => "Too short! Min 4 chars",
            ErrorCode::SlugTooLong => "Too long! Max 512 chars",
            ErrorCode::SlugMisformatted => "Invalid chars! Only base64",
            ErrorCode::PasswordTooShort => "Too short! Min 8 chars",
            ErrorCode::PayloadTooLarge => "Too large! Max 5 MB",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Form fields that own an error message line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSlot {
    Workflow,
    VanityUrl,
    Password,
}

/// Where a backend error code ends up on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerErrorRoute {
    Show {
        slot: ErrorSlot,
        message: &'static str,
    },
    /// No field owns this code; nothing is displayed.
    Unhandled { code: String },
}

/// Routes a backend code by prefix: `SLUG*` to the vanity-URL field and
/// `CONTENT*`/`PAYLOAD*` to the workflow field, provided the code has a message.
/// Every other code, including the known `PASSWORD_TOO_SHORT`, is unhandled.
pub fn route_error_code(code: &str) -> ServerErrorRoute {
    let Some(known) = ErrorCode::from_code(code) else {
        return ServerErrorRoute::Unhandled {
            code: code.to_string(),
        };
    };

    let slot = if code.starts_with("SLUG") {
        Some(ErrorSlot::VanityUrl)
    } else if code.starts_with("CONTENT") || code.starts_with("PAYLOAD") {
        Some(ErrorSlot::Workflow)
    } else {
        None
    };

    match slot {
        Some(slot) => ServerErrorRoute::Show {
            slot,
            message: known.message(),
        },
        None => ServerErrorRoute::Unhandled {
            code: code.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, ErrorSlot, ServerErrorRoute, route_error_code};

    #[test]
    fn every_code_round_trips_through_its_wire_name() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_code(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::from_code("SHORTLINK_NOT_FOUND"), None);
        assert_eq!(ErrorCode::from_code("slug_taken"), None);
    }

    #[test]
    fn slug_codes_go_to_the_vanity_url_field() {
        let expected = [
            ("SLUG_TAKEN", "Taken! Try another"),
            ("SLUG_RESERVED", "Reserved! Try another"),
            ("SLUG_TOO_SHORT", "Too short! Min 4 chars"),
            ("SLUG_TOO_LONG", "Too long! Max 512 chars"),
            ("SLUG_MISFORMATTED", "Invalid chars! Only base64"),
        ];
        for (code, message) in expected {
            assert_eq!(
                route_error_code(code),
                ServerErrorRoute::Show {
                    slot: ErrorSlot::VanityUrl,
                    message
                },
                "{code}"
            );
        }
    }

    #[test]
    fn content_and_payload_codes_go_to_the_workflow_field() {
        assert_eq!(
            route_error_code("CONTENT_MALFORMED"),
            ServerErrorRoute::Show {
                slot: ErrorSlot::Workflow,
                message: "Malformed content!"
            }
        );
        assert_eq!(
            route_error_code("PAYLOAD_TOO_LARGE"),
            ServerErrorRoute::Show {
                slot: ErrorSlot::Workflow,
                message: "Too large! Max 5 MB"
            }
        );
    }

    #[test]
    fn password_code_has_a_message_but_no_field() {
        assert_eq!(ErrorCode::PasswordTooShort.message(), "Too short! Min 8 chars");
        assert_eq!(
            route_error_code("PASSWORD_TOO_SHORT"),
            ServerErrorRoute::Unhandled {
                code: "PASSWORD_TOO_SHORT".to_string()
            }
        );
    }

    #[test]
    fn unmapped_codes_are_unhandled_even_with_a_known_prefix() {
        for code in ["SLUG_UNKNOWN", "CONTENT_BLOCKED", "KIND_UNSUPPORTED", ""] {
            assert_eq!(
                route_error_code(code),
                ServerErrorRoute::Unhandled {
                    code: code.to_string()
                }
            );
        }
    }
}
