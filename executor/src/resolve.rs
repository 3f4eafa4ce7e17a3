//! Back-reference resolution.
//!
//! Both resolvers are pure functions of the operation and the results
//! accumulated so far. When an operation has no back-references the
//! operation's own data is borrowed unchanged.

use std::borrow::Cow;

use batchop_core::{Value, Values};
use batchop_operation::{BackRefIndex, Operation};

use crate::error::{ApplyError, ApplyResult};
use crate::result::OperationResult;

/// Compute the column values to apply.
///
/// Back-referenced columns overwrite same-named entries from the
/// operation's values. Absent values resolve to an empty map.
pub fn resolve_values<'a>(
    op: &'a Operation,
    results: &[OperationResult],
) -> ApplyResult<Cow<'a, Values>> {
    let Some(back_refs) = op.value_back_references() else {
        return Ok(match op.values() {
            Some(values) => Cow::Borrowed(values),
            None => Cow::Owned(Values::new()),
        });
    };

    let mut values = op.values().cloned().unwrap_or_default();
    for (column, &index) in back_refs {
        let value = back_ref_value(results, index)?;
        values.insert(column.clone(), Value::String(value));
    }
    Ok(Cow::Owned(values))
}

/// Compute the selection arguments to apply.
///
/// Back-referenced positions overwrite the corresponding argument.
/// Absent arguments resolve to an empty slice.
pub fn resolve_selection_args<'a>(
    op: &'a Operation,
    results: &[OperationResult],
) -> ApplyResult<Cow<'a, [String]>> {
    let args = op.selection_args().unwrap_or(&[]);
    let Some(back_refs) = op.selection_back_references() else {
        return Ok(Cow::Borrowed(args));
    };

    let mut resolved = args.to_vec();
    for (&position, &index) in back_refs {
        let value = back_ref_value(results, index)?;
        // OperationBuilder::build guarantees position < args.len().
        resolved[position] = value;
    }
    Ok(Cow::Owned(resolved))
}

fn back_ref_value(results: &[OperationResult], index: BackRefIndex) -> ApplyResult<String> {
    results
        .get(index)
        .map(OperationResult::to_back_ref_string)
        .ok_or_else(|| ApplyError::back_ref_out_of_range(index, results.len()))
}
