//! Configuration types for Java code generation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Java package every generated file is declared in
    pub package: String,

    /// Directory generated files are written to
    pub output_directory: PathBuf,

    /// Visitor interface generation
    pub visitor: VisitorConfig,

    /// Schema loading
    pub schema: SchemaConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "org.incenp.obofoundry.kgcl.model".to_string(),
            output_directory: PathBuf::from("output"),
            visitor: VisitorConfig::default(),
            schema: SchemaConfig::default(),
        }
    }
}

/// Visitor interface configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisitorConfig {
    /// Generate the visitor interface at all
    pub enabled: bool,

    /// Class at the top of the visited hierarchy
    pub root_class: String,

    /// Name of the generated interface
    pub interface_name: String,
}

impl Default for VisitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root_class: "Change".to_string(),
            interface_name: "IChangeVisitor".to_string(),
        }
    }
}

impl VisitorConfig {
    /// File name of the generated interface
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}.java", self.interface_name)
    }
}

/// Schema loading configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchemaConfig {
    /// Maximum import depth
    pub max_import_depth: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            max_import_depth: 10,
        }
    }
}
