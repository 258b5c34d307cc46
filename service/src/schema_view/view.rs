//! Main `SchemaView` API for schema introspection

use linkml_core::{
    config::SchemaConfig,
    error::{LinkMLError, Result},
    types::{ClassDefinition, EnumDefinition, SchemaDefinition, SlotDefinition, TypeDefinition},
};
use std::collections::{HashSet, VecDeque};
use std::path::Path;

use crate::parser::SchemaLoader;

/// Range used when neither the slot nor the schema declares one
const FALLBACK_RANGE: &str = "string";

/// Error type for `SchemaView` operations
#[derive(Debug, thiserror::Error)]
pub enum SchemaViewError {
    /// Element not found in schema
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Circular dependency detected in inheritance chain
    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),
}

impl From<SchemaViewError> for LinkMLError {
    fn from(err: SchemaViewError) -> Self {
        let element = match &err {
            SchemaViewError::ElementNotFound(name) | SchemaViewError::CircularDependency(name) => {
                name.clone()
            }
        };
        LinkMLError::schema_validation_at(err.to_string(), element)
    }
}

/// Read-only view over a loaded (and import-merged) schema
///
/// All class queries use schema names, i.e. the keys of the `classes` map.
#[derive(Clone, Debug)]
pub struct SchemaView {
    schema: SchemaDefinition,
}

impl SchemaView {
    /// Create a new `SchemaView` from an already merged schema definition
    #[must_use]
    pub fn new(schema: SchemaDefinition) -> Self {
        Self { schema }
    }

    /// Load a schema file and everything it imports
    ///
    /// # Errors
    ///
    /// Returns an error if the schema or one of its imports cannot be loaded
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, &SchemaConfig::default())
    }

    /// Load a schema file with explicit loading options
    ///
    /// # Errors
    ///
    /// Returns an error if the schema or one of its imports cannot be loaded
    pub fn load_with_config(path: impl AsRef<Path>, config: &SchemaConfig) -> Result<Self> {
        let schema = SchemaLoader::new(config.max_import_depth).load_file(path)?;
        Ok(Self::new(schema))
    }

    /// The underlying schema
    #[must_use]
    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    /// Range of slots that declare none
    #[must_use]
    pub fn default_range(&self) -> &str {
        self.schema.default_range.as_deref().unwrap_or(FALLBACK_RANGE)
    }

    // === Class Operations ===

    /// All class names, in declaration order
    #[must_use]
    pub fn all_class_names(&self) -> Vec<String> {
        self.schema.classes.keys().cloned().collect()
    }

    /// Get a specific class definition
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassDefinition> {
        self.schema.classes.get(name)
    }

    /// Get a class definition that must exist
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the class is not in the schema
    pub fn class(&self, name: &str) -> Result<&ClassDefinition> {
        self.get_class(name)
            .ok_or_else(|| SchemaViewError::ElementNotFound(format!("Class '{name}'")).into())
    }

    /// Direct `is_a` parent of a class
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the class is not in the schema
    pub fn class_parent(&self, name: &str) -> Result<Option<String>> {
        Ok(self.class(name)?.is_a.clone())
    }

    /// Direct parents of a class: the `is_a` parent first, then mixins
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the class is not in the schema
    pub fn class_parents(&self, name: &str) -> Result<Vec<String>> {
        let class_def = self.class(name)?;
        let mut parents = Vec::new();
        if let Some(parent) = &class_def.is_a {
            parents.push(parent.clone());
        }
        for mixin in &class_def.mixins {
            if !parents.contains(mixin) {
                parents.push(mixin.clone());
            }
        }
        Ok(parents)
    }

    /// Direct children of a class (via `is_a` or `mixins`), in declaration order
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the class is not in the schema
    pub fn class_children(&self, name: &str) -> Result<Vec<String>> {
        self.class(name)?;

        Ok(self
            .schema
            .classes
            .iter()
            .filter(|(_, class_def)| {
                class_def.is_a.as_deref() == Some(name) || class_def.mixins.iter().any(|m| m == name)
            })
            .map(|(class_name, _)| class_name.clone())
            .collect())
    }

    /// `is_a` ancestors of a class, nearest first
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` for an unknown class or a dangling parent,
    /// and `CircularDependency` if the chain loops back on itself
    pub fn class_ancestors(&self, name: &str) -> Result<Vec<String>> {
        let mut ancestors = Vec::new();
        let mut visited = HashSet::from([name.to_string()]);
        let mut current = self.class(name)?;

        while let Some(parent) = &current.is_a {
            if !visited.insert(parent.clone()) {
                return Err(SchemaViewError::CircularDependency(format!(
                    "Circular inheritance detected at class '{parent}'"
                ))
                .into());
            }
            ancestors.push(parent.clone());
            current = self.class(parent)?;
        }

        Ok(ancestors)
    }

    /// Slots declared on the class itself (its `slots`, then its `attributes`),
    /// excluding anything inherited
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the class is not in the schema
    pub fn class_own_slots(&self, name: &str) -> Result<Vec<String>> {
        let class_def = self.class(name)?;
        let mut slots = class_def.slots.clone();
        for attribute in class_def.attributes.keys() {
            if !slots.contains(attribute) {
                slots.push(attribute.clone());
            }
        }
        Ok(slots)
    }

    /// Induced slots of a class: its own slots first, then those of its
    /// parents and mixins, breadth first, without duplicates
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the class or one of its parents is missing
    pub fn class_slots(&self, name: &str) -> Result<Vec<String>> {
        let mut slots: Vec<String> = Vec::new();
        for class_name in self.class_closure(name)? {
            for slot in self.class_own_slots(&class_name)? {
                if !slots.contains(&slot) {
                    slots.push(slot);
                }
            }
        }
        Ok(slots)
    }

    /// A slot as seen from a class: the nearest attribute or the schema-level
    /// slot, with `slot_usage` refinements applied from the farthest ancestor
    /// down to the class itself
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the slot is neither an attribute of the
    /// class hierarchy nor a schema-level slot
    pub fn induced_slot(&self, slot_name: &str, class_name: &str) -> Result<SlotDefinition> {
        let closure = self.class_closure(class_name)?;

        let mut induced = closure
            .iter()
            .filter_map(|c| self.get_class(c))
            .find_map(|c| c.attributes.get(slot_name))
            .or_else(|| self.schema.slots.get(slot_name))
            .cloned()
            .ok_or_else(|| {
                SchemaViewError::ElementNotFound(format!(
                    "Slot '{slot_name}' used by class '{class_name}'"
                ))
            })?;

        for class_def in closure.iter().rev().filter_map(|c| self.get_class(c)) {
            if let Some(usage) = class_def.slot_usage.get(slot_name) {
                apply_slot_usage(&mut induced, usage);
            }
        }

        if induced.name.is_empty() {
            induced.name = slot_name.to_string();
        }
        Ok(induced)
    }

    /// Check that every `is_a` and mixin reference resolves and that no
    /// inheritance chain is circular
    ///
    /// # Errors
    ///
    /// Returns the first dangling reference or cycle found
    pub fn validate_hierarchy(&self) -> Result<()> {
        for (name, class_def) in &self.schema.classes {
            for parent in class_def.is_a.iter().chain(&class_def.mixins) {
                if !self.schema.classes.contains_key(parent) {
                    return Err(LinkMLError::schema_validation_at(
                        format!("Class '{name}' refers to undefined parent class '{parent}'"),
                        format!("class.{name}"),
                    ));
                }
            }
            self.class_ancestors(name)?;
        }
        Ok(())
    }

    // === Types and enums ===

    /// Get a type definition
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.schema.types.get(name)
    }

    /// Get an enum definition
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.schema.enums.get(name)
    }

    // === Private Helper Methods ===

    /// The class itself followed by all its parents and mixins, breadth first
    fn class_closure(&self, name: &str) -> Result<Vec<String>> {
        let mut closure = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([name.to_string()]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            queue.extend(self.class_parents(&current)?);
            closure.push(current);
        }

        Ok(closure)
    }
}

/// Overlay the fields a `slot_usage` entry sets onto an induced slot
fn apply_slot_usage(target: &mut SlotDefinition, usage: &SlotDefinition) {
    if usage.description.is_some() {
        target.description.clone_from(&usage.description);
    }
    if usage.range.is_some() {
        target.range.clone_from(&usage.range);
    }
    if usage.required.is_some() {
        target.required = usage.required;
    }
    if usage.multivalued.is_some() {
        target.multivalued = usage.multivalued;
    }
    if usage.identifier.is_some() {
        target.identifier = usage.identifier;
    }
    if usage.inlined.is_some() {
        target.inlined = usage.inlined;
    }
}
