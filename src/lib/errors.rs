use std::fmt;

/// Transport and decoding failures surfaced by the HTTP helpers and flow
/// clients. Validation rejections and backend error codes have their own types;
/// this enum only covers exchanges that did not produce a usable reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_status_for_http_errors() {
        let err = AppError::Http {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (502): Bad gateway");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Timeout: Request timed out. Please try again.");
    }
}
