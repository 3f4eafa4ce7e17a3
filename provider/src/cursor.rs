//! Row cursors returned by provider queries.

use std::ops::{Deref, DerefMut};

use crate::error::ProviderResult;

/// Forward-only view over the rows of a query.
pub trait RowCursor {
    /// Move to the next row. Returns false once the rows are exhausted.
    fn advance(&mut self) -> bool;

    /// Total number of rows the query produced.
    fn row_count(&self) -> usize;

    /// Read column `index` of the current row as an integer.
    fn int_at(&self, index: usize) -> ProviderResult<i64>;

    /// Free the cursor's resources. Calling it more than once is a no-op.
    fn release(&mut self);
}

/// Owns a cursor and releases it when dropped.
pub struct CursorGuard {
    cursor: Box<dyn RowCursor>,
}

impl CursorGuard {
    pub fn new(cursor: Box<dyn RowCursor>) -> Self {
        Self { cursor }
    }
}

impl Deref for CursorGuard {
    type Target = dyn RowCursor;

    fn deref(&self) -> &Self::Target {
        self.cursor.as_ref()
    }
}

impl DerefMut for CursorGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor.as_mut()
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        self.cursor.release();
    }
}
