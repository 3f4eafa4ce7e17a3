//! Common error types for batchop.

use thiserror::Error;

/// Errors raised while constructing core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The resource identifier is empty or malformed.
    #[error("invalid resource id '{input}': {reason}")]
    InvalidResourceId { input: String, reason: String },
}

impl CoreError {
    pub fn invalid_resource_id(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResourceId {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
