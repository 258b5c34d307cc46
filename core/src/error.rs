//! Error types for `LinkML` schema operations

use thiserror::Error;

/// Main error type for schema loading and inspection
#[derive(Error, Debug)]
pub enum LinkMLError {
    /// Schema parsing errors
    #[error("Failed to parse schema: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in schema if available
        location: Option<String>,
    },

    /// Schema consistency errors (dangling references, cycles)
    #[error("Schema validation failed: {message}")]
    SchemaValidationError {
        /// Error message
        message: String,
        /// Schema element that failed
        element: Option<String>,
    },

    /// Import resolution errors
    #[error("Failed to resolve import '{import}': {reason}")]
    ImportError {
        /// Import that failed
        import: String,
        /// Reason for failure
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for `LinkML` operations
pub type Result<T> = std::result::Result<T, LinkMLError>;

impl LinkMLError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a schema validation error pinned to an element
    #[must_use]
    pub fn schema_validation_at(message: impl Into<String>, element: impl Into<String>) -> Self {
        Self::SchemaValidationError {
            message: message.into(),
            element: Some(element.into()),
        }
    }

    /// Create a new import error
    #[must_use]
    pub fn import(import: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImportError {
            import: import.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

impl From<serde_yaml::Error> for LinkMLError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
