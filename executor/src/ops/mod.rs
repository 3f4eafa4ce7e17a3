//! Per-kind apply implementations.
//!
//! Each operation kind (insert, update, delete, count) is applied
//! in its own module and receives already-resolved values and arguments.

mod count;
mod delete;
mod insert;
mod update;

pub use count::execute_count;
pub use delete::execute_delete;
pub use insert::execute_insert;
pub use update::execute_update;

use batchop_operation::Operation;

use crate::error::{ApplyError, ApplyResult};
use crate::result::OperationResult;

/// Turn a row count into a result, enforcing the operation's expected count.
fn counted(op: &Operation, num_rows: u64) -> ApplyResult<OperationResult> {
    match op.expected_count() {
        Some(expected) if expected != num_rows => {
            Err(ApplyError::row_count_mismatch(expected, num_rows))
        }
        _ => Ok(OperationResult::AffectedCount(num_rows)),
    }
}
