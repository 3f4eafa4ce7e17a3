//! Operation error types.

use batchop_core::CoreError;
use thiserror::Error;

/// Result type for operation construction.
pub type OperationResult<T> = Result<T, OperationError>;

/// Errors raised while building an operation.
///
/// These signal caller bugs and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl OperationError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<CoreError> for OperationError {
    fn from(e: CoreError) -> Self {
        Self::InvalidArgument {
            message: e.to_string(),
        }
    }
}
