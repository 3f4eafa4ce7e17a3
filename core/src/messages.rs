//! Common error messages used across batchop components.
//!
//! These constants keep builder rejections and executor failures worded the
//! same way in every crate and in tests.

/// Error: the operation target is missing.
pub const ERR_TARGET_REQUIRED: &str = "target must not be empty";

/// Error: values on a kind other than insert/update.
pub const ERR_VALUES_NOT_ALLOWED: &str = "only inserts and updates can have values";

/// Error: value back-references on a kind other than insert/update.
pub const ERR_VALUE_BACK_REFS_NOT_ALLOWED: &str =
    "only inserts and updates can have value back-references";

/// Error: selection on a kind other than update/delete/count.
pub const ERR_SELECTION_NOT_ALLOWED: &str = "only deletes, updates and counts can have selections";

/// Error: selection back-references on a kind other than update/delete/count.
pub const ERR_SELECTION_BACK_REFS_NOT_ALLOWED: &str =
    "only deletes, updates and counts can have selection back-references";

/// Error: expected count on a kind other than update/delete/count.
pub const ERR_EXPECTED_COUNT_NOT_ALLOWED: &str =
    "only deletes, updates and counts can have expected counts";

/// Error: provider returned no identifier for an insert.
pub const ERR_INSERT_FAILED: &str = "insert failed";

/// Error: count query produced no row.
pub const ERR_COUNT_NO_ROW: &str = "count query must always be able to move to the first row";
