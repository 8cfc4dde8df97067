use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform-wide error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Generic
    InvalidArgument,

    // Entropy
    EntropyUnavailable,
}

impl ErrorCode {
    /// Returns a short string code suitable for API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::EntropyUnavailable => "ENTROPY_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_display() {
        assert_eq!(ErrorCode::InvalidArgument.to_string(), "INVALID_ARGUMENT");
        assert_eq!(
            ErrorCode::EntropyUnavailable.to_string(),
            "ENTROPY_UNAVAILABLE"
        );
    }

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::EntropyUnavailable.as_str(), "ENTROPY_UNAVAILABLE");
    }
}
