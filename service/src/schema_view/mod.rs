//! SchemaView - read-only API for `LinkML` schema introspection
//!
//! Answers the class hierarchy and slot questions code generation needs,
//! resolving imports, inheritance and `slot_usage`.

pub mod view;

pub use view::{SchemaView, SchemaViewError};
