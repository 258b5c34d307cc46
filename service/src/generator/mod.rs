//! Java code generation for `LinkML` schemas
//!
//! A [`DocumentSource`] turns a schema into per-class documents, and the
//! [`TemplateEmitter`] renders them, plus any auxiliary files such as the
//! visitor interface, into an output directory.

pub mod document;
pub mod emitter;
pub mod java;
pub mod templates;
pub mod traits;

// Re-export main types
pub use document::{ClassDocument, Field, JavaClass};
pub use emitter::{GenerationReport, TemplateEmitter};
pub use java::JavaGenerator;
pub use templates::{AuxiliaryTemplate, HelperScope, VisitorInterface};
pub use traits::{DocumentSource, GeneratorError, GeneratorResult};
