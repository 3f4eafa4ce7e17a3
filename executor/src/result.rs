//! Operation result types.

use std::fmt;

use batchop_core::ResourceId;

/// Outcome of one applied operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Identifier of the row an insert created.
    InsertedId(ResourceId),
    /// Rows touched by an update or delete, or counted by a count query.
    AffectedCount(u64),
}

impl OperationResult {
    /// Get the inserted identifier if this is an InsertedId result.
    pub fn inserted_id(&self) -> Option<&ResourceId> {
        match self {
            OperationResult::InsertedId(id) => Some(id),
            OperationResult::AffectedCount(_) => None,
        }
    }

    /// Get the row count if this is an AffectedCount result.
    pub fn affected_count(&self) -> Option<u64> {
        match self {
            OperationResult::InsertedId(_) => None,
            OperationResult::AffectedCount(n) => Some(*n),
        }
    }

    /// Render this result the way back-references substitute it.
    ///
    /// An inserted identifier becomes its final path segment (or the whole
    /// identifier when it has no path); a count becomes its decimal form.
    pub fn to_back_ref_string(&self) -> String {
        match self {
            OperationResult::InsertedId(id) => id
                .last_path_segment()
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string()),
            OperationResult::AffectedCount(n) => n.to_string(),
        }
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationResult::InsertedId(id) => write!(f, "inserted({})", id),
            OperationResult::AffectedCount(n) => write!(f, "count({})", n),
        }
    }
}
