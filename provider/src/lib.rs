//! Batchop Provider
//!
//! The boundary to the data store a batch runs against.
//!
//! The engine never stores data itself. It calls the four methods of
//! [`Provider`] and reads count results through a [`RowCursor`].

mod cursor;
mod error;
mod provider;

pub use cursor::{CursorGuard, RowCursor};
pub use error::{ProviderError, ProviderResult};
pub use provider::Provider;
