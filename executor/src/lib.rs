//! Batchop Executor
//!
//! Apply ordered batches of operations against a provider.
//!
//! Responsibilities:
//! - Resolve back-references against earlier results in the batch
//! - Dispatch each operation to the provider by kind
//! - Enforce expected row counts
//! - Stop the batch at the first failure
//!
//! # Module Structure
//!
//! - `executor` - apply() and the BatchExecutor that drives a batch
//! - `resolve` - Back-reference resolution for values and selection args
//! - `ops/` - Per-kind apply implementations (insert, update, delete, count)
//! - `error` - Error types for apply and batch failures
//! - `result` - Result type produced per applied operation

mod error;
mod executor;
mod ops;
mod resolve;
mod result;


pub use error::{ApplyError, ApplyResult, BatchError, BatchResult};
pub use executor::{apply, BatchExecutor};
pub use resolve::{resolve_selection_args, resolve_values};
pub use result::OperationResult;
