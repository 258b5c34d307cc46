//! # LinkML Java generator
//!
//! Generates a Java class hierarchy plus a visitor interface from a `LinkML`
//! YAML schema.
//!
//! Every schema class becomes one Lombok `@Data` class with the fields it
//! adds to its parent. Classes at or below the visitor root get an
//! `accept` method, and the visitor interface declares one `visit` method
//! for the root and for each of its descendants.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkml_javagen::GeneratorConfig;
//! use linkml_javagen::generator::{JavaGenerator, TemplateEmitter, VisitorInterface};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeneratorConfig::default();
//!     let generator = JavaGenerator::from_file("kgcl.yaml", &config)?;
//!
//!     let visitor = VisitorInterface::new(&config.package, &config.visitor);
//!     let report = TemplateEmitter::new(generator)
//!         .with_visitor(config.visitor.clone())
//!         .generate(&config.output_directory, &[&visitor])?;
//!
//!     println!("wrote {} files", report.file_count());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)] // LinkML, Javadoc, Lombok are proper nouns
#![allow(clippy::must_use_candidate)] // subjective determination

/// Schema parsing and import resolution
pub mod parser;

/// Read-only schema introspection
pub mod schema_view;

/// Class documents, templates and the code emitter
pub mod generator;

/// Configuration file loading
pub mod config;

/// Command-line interface
pub mod cli;

// Re-export commonly used types
pub use generator::{
    DocumentSource, GenerationReport, GeneratorError, GeneratorResult, JavaGenerator,
    TemplateEmitter,
};
pub use linkml_core::{GeneratorConfig, LinkMLError, VisitorConfig};
pub use schema_view::SchemaView;
