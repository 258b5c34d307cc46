//! Template code emitter
//!
//! Renders the class template once per document and any auxiliary templates
//! once per run, writing each result to its own file in the output
//! directory. Files already present are overwritten; unrelated files are
//! left alone.

use askama::Template;
use linkml_core::config::VisitorConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::templates::{AuxiliaryTemplate, ClassTemplate, HelperScope};
use super::traits::{DocumentSource, GeneratorError, GeneratorResult};

/// Files written by one [`TemplateEmitter::generate`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// One file per schema class, in document order
    pub class_files: Vec<PathBuf>,
    /// Auxiliary files, in the order they were requested
    pub auxiliary_files: Vec<PathBuf>,
}

impl GenerationReport {
    /// Total number of files written
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.class_files.len() + self.auxiliary_files.len()
    }
}

/// Emits one Java file per class document plus auxiliary files
pub struct TemplateEmitter<S> {
    source: S,
    visitor: VisitorConfig,
}

impl<S: DocumentSource> TemplateEmitter<S> {
    /// Create an emitter with the default visitor settings
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            visitor: VisitorConfig::default(),
        }
    }

    /// Set which classes get an `accept` method
    #[must_use]
    pub fn with_visitor(mut self, visitor: VisitorConfig) -> Self {
        self.visitor = visitor;
        self
    }

    /// Generate all class files and the given auxiliary files into
    /// `output_directory`, creating it if needed
    ///
    /// # Errors
    ///
    /// Fails on the first error. Files written before it are kept.
    pub fn generate(
        &self,
        output_directory: &Path,
        auxiliary: &[&dyn AuxiliaryTemplate],
    ) -> GeneratorResult<GenerationReport> {
        let documents = self.source.create_documents()?;
        fs::create_dir_all(output_directory)
            .map_err(|e| GeneratorError::io(output_directory, e))?;

        let scope = HelperScope::new(&self.source);
        let mut report = GenerationReport::default();

        for doc in &documents {
            let filename = doc.filename();
            let rendered = ClassTemplate {
                doc,
                cls: &doc.class,
                generator: &scope,
                visitor: &self.visitor,
            }
            .render();
            let code = Self::finish(&scope, &filename, rendered)?;

            let path = output_directory.join(&filename);
            write_file(&path, &code)?;
            debug!(path = %path.display(), "wrote class file");
            report.class_files.push(path);
        }

        for template in auxiliary {
            let filename = template.filename();
            let rendered = template.render(&scope);
            let code = Self::finish(&scope, &filename, rendered)?;

            let path = output_directory.join(&filename);
            write_file(&path, &code)?;
            debug!(path = %path.display(), "wrote auxiliary file");
            report.auxiliary_files.push(path);
        }

        info!(
            classes = report.class_files.len(),
            auxiliary = report.auxiliary_files.len(),
            directory = %output_directory.display(),
            "generation complete"
        );
        Ok(report)
    }

    /// Surface helper failures and template errors, and end the file with a
    /// newline
    fn finish(
        scope: &HelperScope<'_>,
        filename: &str,
        rendered: askama::Result<String>,
    ) -> GeneratorResult<String> {
        if let Some(failure) = scope.take_failure() {
            return Err(failure);
        }
        let mut code = rendered.map_err(|e| GeneratorError::template(filename, e.to_string()))?;
        if !code.ends_with('\n') {
            code.push('\n');
        }
        Ok(code)
    }
}

fn write_file(path: &Path, content: &str) -> GeneratorResult<()> {
    fs::write(path, content).map_err(|e| GeneratorError::io(path, e))
}
