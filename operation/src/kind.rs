//! Operation kinds and the per-kind field legality table.

use std::fmt;

use batchop_core::messages;

/// The four actions an operation can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Insert,
    Update,
    Delete,
    CountQuery,
}

/// Optional fields a builder can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Values,
    ValueBackReferences,
    Selection,
    SelectionBackReferences,
    ExpectedCount,
}

const INSERT_FIELDS: &[Field] = &[Field::Values, Field::ValueBackReferences];

const UPDATE_FIELDS: &[Field] = &[
    Field::Values,
    Field::ValueBackReferences,
    Field::Selection,
    Field::SelectionBackReferences,
    Field::ExpectedCount,
];

const FILTER_FIELDS: &[Field] = &[
    Field::Selection,
    Field::SelectionBackReferences,
    Field::ExpectedCount,
];

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Insert,
        OperationKind::Update,
        OperationKind::Delete,
        OperationKind::CountQuery,
    ];

    /// Fields this kind may carry.
    pub const fn permitted_fields(self) -> &'static [Field] {
        match self {
            OperationKind::Insert => INSERT_FIELDS,
            OperationKind::Update => UPDATE_FIELDS,
            OperationKind::Delete | OperationKind::CountQuery => FILTER_FIELDS,
        }
    }

    /// Check whether this kind may carry `field`.
    pub fn permits(self, field: Field) -> bool {
        self.permitted_fields().contains(&field)
    }

    /// Returns true for kinds that modify provider state.
    pub fn is_write(self) -> bool {
        !matches!(self, OperationKind::CountQuery)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
            OperationKind::CountQuery => "count",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Values,
        Field::ValueBackReferences,
        Field::Selection,
        Field::SelectionBackReferences,
        Field::ExpectedCount,
    ];

    /// Message reported when a kind does not permit this field.
    pub fn rejection_message(self) -> &'static str {
        match self {
            Field::Values => messages::ERR_VALUES_NOT_ALLOWED,
            Field::ValueBackReferences => messages::ERR_VALUE_BACK_REFS_NOT_ALLOWED,
            Field::Selection => messages::ERR_SELECTION_NOT_ALLOWED,
            Field::SelectionBackReferences => messages::ERR_SELECTION_BACK_REFS_NOT_ALLOWED,
            Field::ExpectedCount => messages::ERR_EXPECTED_COUNT_NOT_ALLOWED,
        }
    }
}
