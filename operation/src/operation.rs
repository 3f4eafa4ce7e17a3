//! The immutable operation.

use std::collections::BTreeMap;
use std::fmt;

use batchop_core::{ResourceId, Values};

use crate::kind::OperationKind;

/// Index into the results accumulated so far by a batch.
///
/// Index `i` names the result of the batch's `i`-th operation, so an
/// operation at batch position `k` may only reference indices below `k`.
pub type BackRefIndex = usize;

/// Column name to back-reference map.
pub type ValueBackRefs = BTreeMap<String, BackRefIndex>;

/// Selection argument position to back-reference map.
pub type SelectionBackRefs = BTreeMap<usize, BackRefIndex>;

/// A validated description of one insert/update/delete/count action.
///
/// Only produced by [`OperationBuilder::build`](crate::OperationBuilder::build)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub(crate) kind: OperationKind,
    pub(crate) target: ResourceId,
    pub(crate) selection: Option<String>,
    pub(crate) selection_args: Option<Vec<String>>,
    pub(crate) values: Option<Values>,
    pub(crate) value_back_refs: Option<ValueBackRefs>,
    pub(crate) selection_back_refs: Option<SelectionBackRefs>,
    pub(crate) expected_count: Option<u64>,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn target(&self) -> &ResourceId {
        &self.target
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn selection_args(&self) -> Option<&[String]> {
        self.selection_args.as_deref()
    }

    pub fn values(&self) -> Option<&Values> {
        self.values.as_ref()
    }

    pub fn value_back_references(&self) -> Option<&ValueBackRefs> {
        self.value_back_refs.as_ref()
    }

    pub fn selection_back_references(&self) -> Option<&SelectionBackRefs> {
        self.selection_back_refs.as_ref()
    }

    pub fn expected_count(&self) -> Option<u64> {
        self.expected_count
    }

    /// Returns true if applying this operation modifies provider state.
    pub fn is_write(&self) -> bool {
        self.kind.is_write()
    }

    /// Returns true if applying this operation only reads provider state.
    pub fn is_read_only(&self) -> bool {
        !self.is_write()
    }

    /// Iterate over every back-reference index this operation uses.
    pub fn back_references(&self) -> impl Iterator<Item = BackRefIndex> + '_ {
        let values = self.value_back_refs.iter().flat_map(|m| m.values().copied());
        let args = self
            .selection_back_refs
            .iter()
            .flat_map(|m| m.values().copied());
        values.chain(args)
    }

    /// Largest back-reference index, if any.
    pub fn max_back_reference(&self) -> Option<BackRefIndex> {
        self.back_references().max()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.target)?;
        if let Some(selection) = &self.selection {
            write!(f, " where {}", selection)?;
        }
        if let Some(values) = &self.values {
            write!(f, " values={}", values.len())?;
        }
        let refs = self.back_references().count();
        if refs > 0 {
            write!(f, " backrefs={}", refs)?;
        }
        if let Some(expected) = self.expected_count {
            write!(f, " expect={}", expected)?;
        }
        Ok(())
    }
}
