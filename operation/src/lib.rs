//! Batchop Operation
//!
//! Immutable descriptions of single insert/update/delete/count actions.
//!
//! Responsibilities:
//! - Enforce which fields each operation kind may carry
//! - Build immutable operations through a consuming builder
//! - Record back-references to earlier results in the same batch
//!
//! # Module Structure
//!
//! - `kind` - OperationKind, Field and the legality table
//! - `builder` - OperationBuilder and the factory functions
//! - `operation` - The immutable Operation
//! - `error` - Build-time error types

mod builder;
mod error;
mod kind;
mod operation;

pub use builder::{new_count_query, new_delete, new_insert, new_update, OperationBuilder};
pub use error::{OperationError, OperationResult};
pub use kind::{Field, OperationKind};
pub use operation::{BackRefIndex, Operation, SelectionBackRefs, ValueBackRefs};
