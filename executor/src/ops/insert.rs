//! INSERT operation - creates a new row.

use batchop_core::{messages, Values};
use batchop_operation::Operation;
use batchop_provider::Provider;

use crate::error::{ApplyError, ApplyResult};
use crate::result::OperationResult;

/// Insert `values` into the operation's target.
///
/// The expected count is never consulted for inserts.
pub fn execute_insert<P: Provider + ?Sized>(
    provider: &mut P,
    op: &Operation,
    values: &Values,
) -> ApplyResult<OperationResult> {
    let id = provider
        .insert(op.target(), values)?
        .ok_or_else(|| ApplyError::apply_failed(messages::ERR_INSERT_FAILED))?;
    Ok(OperationResult::InsertedId(id))
}
