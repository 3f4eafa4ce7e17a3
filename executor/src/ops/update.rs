//! UPDATE operation - changes matching rows.

use batchop_core::Values;
use batchop_operation::Operation;
use batchop_provider::Provider;

use crate::error::ApplyResult;
use crate::result::OperationResult;

/// Update the rows selected by `op` with `values`.
pub fn execute_update<P: Provider + ?Sized>(
    provider: &mut P,
    op: &Operation,
    values: &Values,
    args: &[String],
) -> ApplyResult<OperationResult> {
    let num_rows = provider.update(op.target(), values, op.selection(), args)?;
    super::counted(op, num_rows)
}
