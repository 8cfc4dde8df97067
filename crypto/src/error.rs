use cryptorand_types::ErrorCode;
use thiserror::Error;

/// Errors produced by entropy reads and the helpers built on them.
#[derive(Debug, Error)]
pub enum RandError {
    /// The entropy stream was closed, came up short, or reported an I/O error.
    #[error("entropy read failed: {0}")]
    Entropy(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RandError {
    /// Map to a platform error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            RandError::Entropy(_) => ErrorCode::EntropyUnavailable,
            RandError::InvalidArgument(_) => ErrorCode::InvalidArgument,
        }
    }
}

pub type RandResult<T> = Result<T, RandError>;
