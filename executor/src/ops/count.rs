//! COUNT operation - counts matching rows without changing them.

use batchop_core::{messages, COUNT_COLUMNS};
use batchop_operation::Operation;
use batchop_provider::{CursorGuard, Provider};

use crate::error::{ApplyError, ApplyResult};
use crate::result::OperationResult;

/// Count the rows selected by `op`.
///
/// The provider must answer with exactly one row holding the count in its
/// first column. Anything else is a provider contract violation. The cursor
/// is released on every path.
pub fn execute_count<P: Provider + ?Sized>(
    provider: &mut P,
    op: &Operation,
    args: &[String],
) -> ApplyResult<OperationResult> {
    let mut cursor = CursorGuard::new(provider.query(
        op.target(),
        COUNT_COLUMNS,
        op.selection(),
        args,
    )?);

    if !cursor.advance() {
        return Err(ApplyError::count_query_invariant(messages::ERR_COUNT_NO_ROW));
    }
    let rows = cursor.row_count();
    if rows != 1 {
        return Err(ApplyError::count_query_invariant(format!(
            "count query must return exactly one row, found {}",
            rows
        )));
    }

    let count = cursor.int_at(0)?;
    let num_rows = u64::try_from(count).map_err(|_| {
        ApplyError::count_query_invariant(format!("count query returned negative count {}", count))
    })?;
    super::counted(op, num_rows)
}
