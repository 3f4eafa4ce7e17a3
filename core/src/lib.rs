//! Batchop Core Types
//!
//! This crate provides the foundational types shared by every batchop crate:
//! - Scalar values stored in columns (the Value enum)
//! - Column maps (Values) and the `values!` macro
//! - Resource identifiers (ResourceId)
//! - Process-wide constants and common error messages

mod error;
mod id;
pub mod messages;
mod value;

pub use error::*;
pub use id::*;
pub use value::*;

/// Column requested by a count query.
pub const COUNT_COLUMN: &str = "count(*)";

/// Projection used for every count query.
pub const COUNT_COLUMNS: &[&str] = &[COUNT_COLUMN];
