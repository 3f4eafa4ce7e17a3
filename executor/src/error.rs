//! Apply error types.

use batchop_operation::{BackRefIndex, OperationKind};
use batchop_provider::ProviderError;
use thiserror::Error;

/// Result type for applying a single operation.
pub type ApplyResult<T> = Result<T, ApplyError>;

/// Errors that stop an operation from producing a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("asked for back-reference {index} but there are only {available} results")]
    BackRefOutOfRange {
        index: BackRefIndex,
        available: usize,
    },

    #[error("{message}")]
    ApplyFailed { message: String },

    #[error("wrong number of rows: expected {expected}, got {actual}")]
    RowCountMismatch { expected: u64, actual: u64 },

    #[error("count query invariant violated: {message}")]
    CountQueryInvariantViolated { message: String },

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl ApplyError {
    pub fn back_ref_out_of_range(index: BackRefIndex, available: usize) -> Self {
        Self::BackRefOutOfRange { index, available }
    }

    pub fn apply_failed(message: impl Into<String>) -> Self {
        Self::ApplyFailed {
            message: message.into(),
        }
    }

    pub fn row_count_mismatch(expected: u64, actual: u64) -> Self {
        Self::RowCountMismatch { expected, actual }
    }

    pub fn count_query_invariant(message: impl Into<String>) -> Self {
        Self::CountQueryInvariantViolated {
            message: message.into(),
        }
    }
}

/// Result type for applying a whole batch.
pub type BatchResult<T> = Result<T, BatchError>;

/// The terminal error of a batch: which operation failed and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation {index} ({kind}) failed: {source}")]
pub struct BatchError {
    /// Batch position of the failing operation.
    pub index: usize,
    pub kind: OperationKind,
    #[source]
    pub source: ApplyError,
}

impl BatchError {
    pub fn new(index: usize, kind: OperationKind, source: ApplyError) -> Self {
        Self {
            index,
            kind,
            source,
        }
    }
}
