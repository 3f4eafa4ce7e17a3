//! Batch executor - applies operations in order against a provider.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/insert.rs` - INSERT (row creation)
//! - `ops/update.rs` - UPDATE (row modification)
//! - `ops/delete.rs` - DELETE (row removal)
//! - `ops/count.rs` - COUNT (row-count query)

use batchop_operation::{Operation, OperationKind};
use batchop_provider::Provider;

use crate::error::{ApplyResult, BatchError, BatchResult};
use crate::ops;
use crate::resolve::{resolve_selection_args, resolve_values};
use crate::result::OperationResult;

/// Apply one operation, given the results of the operations before it.
///
/// `results[i]` must be the result of the batch's `i`-th operation, so
/// `results.len()` is this operation's batch position.
pub fn apply<P: Provider + ?Sized>(
    provider: &mut P,
    op: &Operation,
    results: &[OperationResult],
) -> ApplyResult<OperationResult> {
    let position = results.len();
    tracing::debug!(position, kind = %op.kind(), resource = %op.target(), "applying operation");

    let values = resolve_values(op, results)?;
    let args = resolve_selection_args(op, results)?;
    tracing::trace!(position, values = ?values, args = ?args, "resolved back-references");

    match op.kind() {
        OperationKind::Insert => ops::execute_insert(provider, op, &values),
        OperationKind::Update => ops::execute_update(provider, op, &values, &args),
        OperationKind::Delete => ops::execute_delete(provider, op, &args),
        OperationKind::CountQuery => ops::execute_count(provider, op, &args),
    }
}

/// Batch executor.
///
/// Operations run strictly one after another; the first failure ends the
/// batch. Effects of operations that already succeeded stay applied.
pub struct BatchExecutor<'p, P: Provider + ?Sized> {
    provider: &'p mut P,
}

impl<'p, P: Provider + ?Sized> BatchExecutor<'p, P> {
    /// Create a new executor.
    pub fn new(provider: &'p mut P) -> Self {
        Self { provider }
    }

    /// Apply a single operation (see [`apply`]).
    pub fn apply(
        &mut self,
        op: &Operation,
        results: &[OperationResult],
    ) -> ApplyResult<OperationResult> {
        apply(&mut *self.provider, op, results)
    }

    /// Apply `operations` in order, returning one result per operation.
    #[tracing::instrument(level = "debug", skip(self, operations), fields(len = operations.len()))]
    pub fn apply_batch(&mut self, operations: &[Operation]) -> BatchResult<Vec<OperationResult>> {
        let mut results = Vec::with_capacity(operations.len());

        for (index, op) in operations.iter().enumerate() {
            match self.apply(op, &results) {
                Ok(result) => {
                    tracing::trace!(index, result = %result, "operation applied");
                    results.push(result);
                }
                Err(source) => {
                    tracing::warn!(index, kind = %op.kind(), error = %source, "batch stopped");
                    return Err(BatchError::new(index, op.kind(), source));
                }
            }
        }

        tracing::debug!(applied = results.len(), "batch complete");
        Ok(results)
    }
}
