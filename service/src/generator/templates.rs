//! Template contexts and the helper queries templates can call
//!
//! Class templates are bound to a document, its class and a [`HelperScope`];
//! auxiliary templates only see the helper scope. The helper scope exposes
//! three read-only hierarchy queries and nothing else of the generator.

use askama::Template;
use linkml_core::config::VisitorConfig;
use std::cell::RefCell;
use std::collections::HashSet;

use super::document::{ClassDocument, JavaClass};
use super::traits::{DocumentSource, GeneratorError};

/// Hierarchy queries bound into template scope
///
/// Templates cannot propagate errors from helper calls, so a failing query
/// records its error and returns an empty answer; the emitter checks
/// [`HelperScope::take_failure`] after each render.
pub struct HelperScope<'a> {
    source: &'a dyn DocumentSource,
    failure: RefCell<Option<GeneratorError>>,
}

impl<'a> HelperScope<'a> {
    /// Create a helper scope over a document source
    #[must_use]
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self {
            source,
            failure: RefCell::new(None),
        }
    }

    /// True iff a class named `name` appears anywhere in the `is_a` chain
    /// above `cls`
    pub fn has_ancestor(&self, cls: &JavaClass, name: &str) -> bool {
        let mut visited = HashSet::from([cls.source_name.clone()]);
        let mut current = cls.source_name.clone();

        loop {
            let parent = match self.source.class_parent(&current) {
                Ok(Some(parent)) => parent,
                Ok(None) => return false,
                Err(e) => return self.fail(e),
            };
            if parent == name || self.source.class_name(&parent) == name {
                return true;
            }
            if !visited.insert(parent.clone()) {
                return self.fail(GeneratorError::SchemaValidation(format!(
                    "Circular inheritance detected at class '{parent}'"
                )));
            }
            current = parent;
        }
    }

    /// True iff `cls` has a parent and that parent declares slots of its own
    pub fn parent_has_slots(&self, cls: &JavaClass) -> bool {
        let parent = match self.source.class_parent(&cls.source_name) {
            Ok(Some(parent)) => parent,
            Ok(None) => return false,
            Err(e) => return self.fail(e),
        };
        match self.source.class_own_slots(&parent) {
            Ok(slots) => !slots.is_empty(),
            Err(e) => self.fail(e),
        }
    }

    /// Generated names of every class transitively below `name`, in
    /// pre-order, each listed once
    ///
    /// The result is computed fresh on every call.
    pub fn get_descendants(&self, name: &str) -> Vec<String> {
        let Some(root) = self.source.resolve_class(name) else {
            self.fail(GeneratorError::SchemaValidation(format!(
                "Class '{name}' is not defined in the schema"
            )));
            return Vec::new();
        };

        let mut descendants = Vec::new();
        let mut visited = HashSet::from([root.clone()]);
        let mut stack = Vec::new();
        if !self.push_children(&root, &mut stack) {
            return Vec::new();
        }

        // marked on pop: the first pre-order occurrence wins
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if !self.push_children(&current, &mut stack) {
                return Vec::new();
            }
            descendants.push(self.source.class_name(&current));
        }

        descendants
    }

    /// Push the children of `name` so the first child is popped first; false
    /// if the lookup failed
    fn push_children(&self, name: &str, stack: &mut Vec<String>) -> bool {
        match self.source.class_children(name) {
            Ok(children) => {
                stack.extend(children.into_iter().rev());
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Error recorded by a helper query during the last render, if any
    pub fn take_failure(&self) -> Option<GeneratorError> {
        self.failure.borrow_mut().take()
    }

    fn fail(&self, err: GeneratorError) -> bool {
        let mut failure = self.failure.borrow_mut();
        if failure.is_none() {
            *failure = Some(err);
        }
        false
    }
}

/// Template for one generated class
#[derive(Template)]
#[template(path = "java/class.java", escape = "none")]
pub struct ClassTemplate<'a> {
    /// Document being rendered
    pub doc: &'a ClassDocument,
    /// The document's class
    pub cls: &'a JavaClass,
    /// Hierarchy queries
    pub generator: &'a HelperScope<'a>,
    /// Which classes get an `accept` method
    pub visitor: &'a VisitorConfig,
}

/// Template for the visitor interface
#[derive(Template)]
#[template(path = "java/visitor.java", escape = "none")]
pub struct VisitorTemplate<'a> {
    /// Java package of the interface
    pub package: &'a str,
    /// Generated name of the visited root class
    pub root: String,
    /// Interface name
    pub interface: &'a str,
    /// Hierarchy queries
    pub generator: &'a HelperScope<'a>,
}

/// A supplementary file rendered with only the helper scope bound
pub trait AuxiliaryTemplate {
    /// Output file name, relative to the output directory
    fn filename(&self) -> String;

    /// Render the file content
    ///
    /// # Errors
    ///
    /// Returns the template engine's error if rendering fails
    fn render(&self, generator: &HelperScope<'_>) -> askama::Result<String>;
}

/// Visitor interface over a root class and all its descendants
pub struct VisitorInterface<'a> {
    package: &'a str,
    config: &'a VisitorConfig,
}

impl<'a> VisitorInterface<'a> {
    /// Create the visitor interface file for a package
    #[must_use]
    pub fn new(package: &'a str, config: &'a VisitorConfig) -> Self {
        Self { package, config }
    }
}

impl AuxiliaryTemplate for VisitorInterface<'_> {
    fn filename(&self) -> String {
        self.config.filename()
    }

    fn render(&self, generator: &HelperScope<'_>) -> askama::Result<String> {
        let root = generator
            .source
            .resolve_class(&self.config.root_class)
            .map_or_else(
                || self.config.root_class.clone(),
                |name| generator.source.class_name(&name),
            );

        VisitorTemplate {
            package: self.package,
            root,
            interface: &self.config.interface_name,
            generator,
        }
        .render()
    }
}
