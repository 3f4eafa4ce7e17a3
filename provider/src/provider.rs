//! The provider capability.

use batchop_core::{ResourceId, Values};

use crate::cursor::RowCursor;
use crate::error::ProviderResult;

/// A data store the batch executor applies operations to.
///
/// Implementations own atomicity: the executor applies operations one at a
/// time and never rolls back earlier ones.
pub trait Provider {
    /// Insert a row. Returns the new row's identifier, or `None` if the
    /// store did not create one.
    fn insert(&mut self, target: &ResourceId, values: &Values) -> ProviderResult<Option<ResourceId>>;

    /// Update the rows matching `selection`. Returns the number of rows changed.
    fn update(
        &mut self,
        target: &ResourceId,
        values: &Values,
        selection: Option<&str>,
        args: &[String],
    ) -> ProviderResult<u64>;

    /// Delete the rows matching `selection`. Returns the number of rows removed.
    fn delete(
        &mut self,
        target: &ResourceId,
        selection: Option<&str>,
        args: &[String],
    ) -> ProviderResult<u64>;

    /// Query `columns` of the rows matching `selection`.
    fn query(
        &mut self,
        target: &ResourceId,
        columns: &[&str],
        selection: Option<&str>,
        args: &[String],
    ) -> ProviderResult<Box<dyn RowCursor>>;
}

impl<P: Provider + ?Sized> Provider for &mut P {
    fn insert(&mut self, target: &ResourceId, values: &Values) -> ProviderResult<Option<ResourceId>> {
        (**self).insert(target, values)
    }

    fn update(
        &mut self,
        target: &ResourceId,
        values: &Values,
        selection: Option<&str>,
        args: &[String],
    ) -> ProviderResult<u64> {
        (**self).update(target, values, selection, args)
    }

    fn delete(
        &mut self,
        target: &ResourceId,
        selection: Option<&str>,
        args: &[String],
    ) -> ProviderResult<u64> {
        (**self).delete(target, selection, args)
    }

    fn query(
        &mut self,
        target: &ResourceId,
        columns: &[&str],
        selection: Option<&str>,
        args: &[String],
    ) -> ProviderResult<Box<dyn RowCursor>> {
        (**self).query(target, columns, selection, args)
    }
}
