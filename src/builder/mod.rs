//! Builder API for vocabularies and transition tables.
//!
//! `lifecycle_enum!` declares closed, label-carrying enumerations and
//! `TableBuilder` assembles validated transition tables for callers that
//! need a lifecycle other than the canonical intent table.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;
