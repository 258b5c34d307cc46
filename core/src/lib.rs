//! # `LinkML` Java generator core
//!
//! Schema types, error handling and configuration shared by the schema
//! loader, the schema view and the Java code emitter.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for `LinkML` operations
pub mod error;

/// Type definitions for `LinkML` schemas
pub mod types;

/// Configuration types for generation runs
pub mod config;

// Re-export commonly used types
pub use config::{GeneratorConfig, SchemaConfig, VisitorConfig};
pub use error::{LinkMLError, Result};
pub use types::{ClassDefinition, SchemaDefinition, SlotDefinition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{LinkMLError, Result};
    pub use crate::types::*;
}
