//! Operation builder.
//!
//! Every setter checks the builder's kind against the legality table in
//! `kind` before storing anything, so an illegal combination never reaches
//! an [`Operation`].

use batchop_core::{ResourceId, Values};

use crate::error::{OperationError, OperationResult};
use crate::kind::{Field, OperationKind};
use crate::operation::{Operation, SelectionBackRefs, ValueBackRefs};

/// Accumulates the fields of one operation.
#[derive(Debug, Clone)]
pub struct OperationBuilder {
    kind: OperationKind,
    target: ResourceId,
    selection: Option<String>,
    selection_args: Option<Vec<String>>,
    values: Option<Values>,
    value_back_refs: Option<ValueBackRefs>,
    selection_back_refs: Option<SelectionBackRefs>,
    expected_count: Option<u64>,
}

/// Start building an insert into `target`.
pub fn new_insert(target: ResourceId) -> OperationBuilder {
    OperationBuilder::new(OperationKind::Insert, target)
}

/// Start building an update of rows in `target`.
pub fn new_update(target: ResourceId) -> OperationBuilder {
    OperationBuilder::new(OperationKind::Update, target)
}

/// Start building a delete of rows in `target`.
pub fn new_delete(target: ResourceId) -> OperationBuilder {
    OperationBuilder::new(OperationKind::Delete, target)
}

/// Start building a row-count query against `target`.
pub fn new_count_query(target: ResourceId) -> OperationBuilder {
    OperationBuilder::new(OperationKind::CountQuery, target)
}

impl OperationBuilder {
    /// Create a builder for `kind` acting on `target`.
    pub fn new(kind: OperationKind, target: ResourceId) -> Self {
        Self {
            kind,
            target,
            selection: None,
            selection_args: None,
            values: None,
            value_back_refs: None,
            selection_back_refs: None,
            expected_count: None,
        }
    }

    /// Create a builder from an unparsed target.
    ///
    /// Fails with `InvalidArgument` when the target is empty or malformed.
    pub fn parse(kind: OperationKind, target: &str) -> OperationResult<Self> {
        Ok(Self::new(kind, ResourceId::parse(target)?))
    }

    /// Set the column values to write.
    pub fn with_values(mut self, values: Values) -> OperationResult<Self> {
        self.ensure_permitted(Field::Values)?;
        self.values = Some(values);
        Ok(self)
    }

    /// Fill columns from earlier results at apply time.
    ///
    /// Back-referenced columns win over same-named entries in `with_values`.
    pub fn with_value_back_references(mut self, back_refs: ValueBackRefs) -> OperationResult<Self> {
        self.ensure_permitted(Field::ValueBackReferences)?;
        self.value_back_refs = Some(back_refs);
        Ok(self)
    }

    /// Set the row predicate and its positional arguments.
    pub fn with_selection<I, S>(mut self, selection: impl Into<String>, args: I) -> OperationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_permitted(Field::Selection)?;
        self.selection = Some(selection.into());
        self.selection_args = Some(args.into_iter().map(Into::into).collect());
        Ok(self)
    }

    /// Replace selection arguments with earlier results at apply time.
    pub fn with_selection_back_references(
        mut self,
        back_refs: SelectionBackRefs,
    ) -> OperationResult<Self> {
        self.ensure_permitted(Field::SelectionBackReferences)?;
        self.selection_back_refs = Some(back_refs);
        Ok(self)
    }

    /// Require the operation to touch exactly `count` rows.
    pub fn with_expected_count(mut self, count: u64) -> OperationResult<Self> {
        self.ensure_permitted(Field::ExpectedCount)?;
        self.expected_count = Some(count);
        Ok(self)
    }

    /// Finish the operation.
    ///
    /// Fails when a selection back-reference names an argument position the
    /// selection does not have.
    pub fn build(self) -> OperationResult<Operation> {
        if let Some(back_refs) = &self.selection_back_refs {
            let arg_count = self.selection_args.as_ref().map_or(0, Vec::len);
            if let Some(position) = back_refs.keys().find(|&&p| p >= arg_count) {
                return Err(OperationError::invalid_argument(format!(
                    "selection back-reference targets argument {} but the selection has {} arguments",
                    position, arg_count
                )));
            }
        }

        Ok(Operation {
            kind: self.kind,
            target: self.target,
            selection: self.selection,
            selection_args: self.selection_args,
            values: self.values,
            value_back_refs: self.value_back_refs,
            selection_back_refs: self.selection_back_refs,
            expected_count: self.expected_count,
        })
    }

    fn ensure_permitted(&self, field: Field) -> OperationResult<()> {
        if self.kind.permits(field) {
            Ok(())
        } else {
            Err(OperationError::invalid_argument(field.rejection_message()))
        }
    }
}
