//! Schema parsing module
//!
//! Parses `LinkML` schemas from YAML and pulls in the schemas they import.

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};
use std::path::Path;

pub mod import_resolver;
pub mod yaml_parser;

pub use import_resolver::ImportResolver;
pub use yaml_parser::YamlParser;

/// Trait for schema parsers
pub trait SchemaParser: Send + Sync {
    /// Parse schema from string content
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if parsing fails
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition>;

    /// Parse schema from file
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if:
    /// - File cannot be read
    /// - Parsing fails
    fn parse_file(&self, path: &Path) -> Result<SchemaDefinition>;
}

/// Main parser that dispatches on the file extension
#[derive(Default)]
pub struct Parser {
    yaml: YamlParser,
}

impl Parser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            yaml: YamlParser::new(),
        }
    }

    /// Parse schema from file, detecting format from extension
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if:
    /// - File has no extension
    /// - File format is not supported
    /// - Parsing fails
    pub fn parse_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| LinkMLError::parse(format!("No file extension found: {}", path.display())))?;

        match extension {
            "yaml" | "yml" => self.yaml.parse_file(path),
            _ => Err(LinkMLError::parse(format!(
                "Unsupported file format: {extension}"
            ))),
        }
    }
}

/// Loads a schema file together with everything it imports
pub struct SchemaLoader {
    parser: Parser,
    resolver: ImportResolver,
}

impl SchemaLoader {
    /// Create a loader that follows imports up to `max_import_depth` levels
    #[must_use]
    pub fn new(max_import_depth: usize) -> Self {
        Self {
            parser: Parser::new(),
            resolver: ImportResolver::new(max_import_depth),
        }
    }

    /// Load a schema file and merge its imports
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if the file or one of its imports cannot be
    /// read or parsed
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SchemaDefinition> {
        let path = path.as_ref();
        let schema = self.parser.parse_file(path)?;
        self.resolver.resolve(schema, path)
    }
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new(linkml_core::SchemaConfig::default().max_import_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unsupported_extension() {
        let parser = Parser::new();
        let err = parser
            .parse_file(Path::new("schema.json"))
            .expect_err("json is not accepted");
        assert!(err.to_string().contains("Unsupported file format: json"));

        let err = parser
            .parse_file(Path::new("schema"))
            .expect_err("no extension");
        assert!(matches!(err, LinkMLError::ParseError { .. }));
    }

    #[test]
    fn test_loader_reads_yml_files() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("kgcl.yml");
        fs::write(
            &path,
            "id: https://example.org/kgcl\nname: kgcl\nclasses:\n  Change:\n",
        )?;

        let schema = SchemaLoader::default().load_file(&path)?;
        assert_eq!(schema.name, "kgcl");
        assert!(schema.classes.contains_key("Change"));
        Ok(())
    }
}
