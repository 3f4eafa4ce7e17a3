//! DELETE operation - removes matching rows.

use batchop_operation::Operation;
use batchop_provider::Provider;

use crate::error::ApplyResult;
use crate::result::OperationResult;

/// Delete the rows selected by `op`.
pub fn execute_delete<P: Provider + ?Sized>(
    provider: &mut P,
    op: &Operation,
    args: &[String],
) -> ApplyResult<OperationResult> {
    let num_rows = provider.delete(op.target(), op.selection(), args)?;
    super::counted(op, num_rows)
}
