//! Core generator traits and types
//!
//! This module defines the error type shared by the code emitter and the
//! contract between the emitter and whatever produces class documents.

use linkml_core::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

use super::document::ClassDocument;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur during code generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Schema consistency error found while building documents
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// Output directory or file could not be written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template rendering error
    #[error("Template error in {template}: {message}")]
    Template {
        /// Template (or output file) being rendered
        template: String,
        /// Error message
        message: String,
    },

    /// `LinkML` core error
    #[error("LinkML error: {0}")]
    LinkML(#[from] LinkMLError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a template error
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }
}

/// Producer of class documents and the schema queries templates rely on
///
/// Every name taken or returned here is a schema class name, except
/// [`DocumentSource::class_name`] which maps a schema name to the name used
/// in generated code.
pub trait DocumentSource {
    /// One document per schema class, in declaration order
    ///
    /// # Errors
    ///
    /// Returns an error if the schema hierarchy is inconsistent or a slot
    /// cannot be resolved
    fn create_documents(&self) -> GeneratorResult<Vec<ClassDocument>>;

    /// Direct `is_a` parent of a class
    ///
    /// # Errors
    ///
    /// Returns an error if the class does not exist
    fn class_parent(&self, name: &str) -> GeneratorResult<Option<String>>;

    /// Direct children of a class, in declaration order
    ///
    /// # Errors
    ///
    /// Returns an error if the class does not exist
    fn class_children(&self, name: &str) -> GeneratorResult<Vec<String>>;

    /// Slots declared on the class itself, excluding inherited ones
    ///
    /// # Errors
    ///
    /// Returns an error if the class does not exist
    fn class_own_slots(&self, name: &str) -> GeneratorResult<Vec<String>>;

    /// Schema name of a class given either its schema name or generated name
    fn resolve_class(&self, name: &str) -> Option<String>;

    /// Name used for a schema class in generated code
    fn class_name(&self, name: &str) -> String;
}
