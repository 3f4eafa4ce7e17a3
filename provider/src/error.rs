//! Provider error types.

use thiserror::Error;

/// Errors a provider may raise. The engine propagates them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider failure: {message}")]
    Failed { message: String },

    #[error("unknown target: {target}")]
    UnknownTarget { target: String },

    #[error("invalid selection: {message}")]
    InvalidSelection { message: String },

    #[error("column {index} out of range")]
    ColumnOutOfRange { index: usize },

    #[error("column {index} is not {expected}")]
    ColumnType { index: usize, expected: String },
}

impl ProviderError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn unknown_target(target: impl Into<String>) -> Self {
        Self::UnknownTarget {
            target: target.into(),
        }
    }

    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }

    pub fn column_out_of_range(index: usize) -> Self {
        Self::ColumnOutOfRange { index }
    }

    pub fn column_type(index: usize, expected: impl Into<String>) -> Self {
        Self::ColumnType {
            index,
            expected: expected.into(),
        }
    }
}

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;
