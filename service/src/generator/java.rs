//! Java document builder for `LinkML` schemas
//!
//! Turns every schema class into a [`ClassDocument`]: Java class name, parent,
//! and the fields the class adds on top of its parent, with `LinkML` ranges
//! resolved to Java types.

use linkml_core::config::GeneratorConfig;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

use super::document::{ClassDocument, Field, JavaClass};
use super::traits::{DocumentSource, GeneratorResult};
use crate::schema_view::SchemaView;

/// Java type used when a range cannot be resolved any further
const FALLBACK_TYPE: &str = "String";

/// Java document generator
pub struct JavaGenerator {
    /// Schema being generated from
    view: SchemaView,
    /// Java package of generated files
    package: String,
    /// Type mapping from `LinkML` builtin types to Java
    type_map: HashMap<&'static str, &'static str>,
    /// Type mapping from XSD datatypes to Java, for custom types
    xsd_map: HashMap<&'static str, &'static str>,
}

impl JavaGenerator {
    /// Create a generator over a loaded schema
    #[must_use]
    pub fn new(view: SchemaView, package: impl Into<String>) -> Self {
        let type_map = HashMap::from([
            ("string", "String"),
            ("integer", "Integer"),
            ("float", "Float"),
            ("double", "Double"),
            ("boolean", "Boolean"),
            ("datetime", "ZonedDateTime"),
            ("date", "LocalDate"),
            ("time", "Instant"),
            ("decimal", "BigDecimal"),
            ("uri", "String"),
            ("uriorcurie", "String"),
            ("curie", "String"),
            ("ncname", "String"),
            ("objectidentifier", "String"),
            ("nodeidentifier", "String"),
        ]);

        let xsd_map = HashMap::from([
            ("xsd:string", "String"),
            ("xsd:integer", "Integer"),
            ("xsd:int", "Integer"),
            ("xsd:float", "Float"),
            ("xsd:double", "Double"),
            ("xsd:boolean", "Boolean"),
            ("xsd:dateTime", "ZonedDateTime"),
            ("xsd:date", "LocalDate"),
            ("xsd:time", "Instant"),
            ("xsd:decimal", "BigDecimal"),
            ("xsd:anyURI", "String"),
        ]);

        Self {
            view,
            package: package.into(),
            type_map,
            xsd_map,
        }
    }

    /// Load a schema file and its imports, using the package and import
    /// settings from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be loaded
    pub fn from_file(path: impl AsRef<Path>, config: &GeneratorConfig) -> GeneratorResult<Self> {
        let view = SchemaView::load_with_config(path, &config.schema)?;
        Ok(Self::new(view, config.package.clone()))
    }

    /// Build the template view of one class
    fn java_class(&self, name: &str) -> GeneratorResult<JavaClass> {
        let class_def = self.view.class(name)?;

        let all_slots = self.view.class_slots(name)?;
        let inherited: HashSet<String> = match &class_def.is_a {
            Some(parent) => self.view.class_slots(parent)?.into_iter().collect(),
            None => HashSet::new(),
        };

        let mut fields = Vec::new();
        let mut all_fields = Vec::with_capacity(all_slots.len());
        for slot_name in &all_slots {
            let field = self.field(slot_name, name)?;
            if !inherited.contains(slot_name) {
                fields.push(field.clone());
            }
            all_fields.push(field);
        }

        Ok(JavaClass {
            name: to_pascal_case(name),
            source_name: name.to_string(),
            description: class_def.description.clone(),
            is_a: class_def.is_a.as_deref().map(to_pascal_case),
            is_abstract: class_def.is_abstract(),
            fields,
            all_fields,
        })
    }

    fn field(&self, slot_name: &str, class_name: &str) -> GeneratorResult<Field> {
        let slot = self.view.induced_slot(slot_name, class_name)?;
        let range = slot
            .range
            .as_deref()
            .unwrap_or_else(|| self.view.default_range());
        let java_type = self.java_type(range);

        Ok(Field {
            name: to_camel_case(slot_name),
            range: if slot.is_multivalued() {
                format!("List<{java_type}>")
            } else {
                java_type
            },
            slot_name: slot_name.to_string(),
        })
    }

    /// Get Java type for a `LinkML` range
    fn java_type(&self, range: &str) -> String {
        if let Some(java_type) = self.type_map.get(range) {
            return (*java_type).to_string();
        }
        if self.view.get_type(range).is_some() {
            return self.custom_type(range);
        }
        if self.view.get_class(range).is_some() || self.view.get_enum(range).is_some() {
            return to_pascal_case(range);
        }

        warn!(range = %range, "range is not a known type, class or enum");
        to_pascal_case(range)
    }

    /// Follow a custom type's `typeof` chain down to something with a Java
    /// equivalent
    fn custom_type(&self, name: &str) -> String {
        let mut visited = HashSet::new();
        let mut current = name;

        while visited.insert(current) {
            if let Some(java_type) = self.type_map.get(current) {
                return (*java_type).to_string();
            }
            let Some(type_def) = self.view.get_type(current) else {
                break;
            };
            if let Some(java_type) = type_def.uri.as_deref().and_then(|u| self.xsd_map.get(u)) {
                return (*java_type).to_string();
            }
            match type_def.base_type.as_deref() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        warn!(type_name = %name, "cannot map custom type to Java, using {FALLBACK_TYPE}");
        FALLBACK_TYPE.to_string()
    }
}

impl DocumentSource for JavaGenerator {
    fn create_documents(&self) -> GeneratorResult<Vec<ClassDocument>> {
        self.view.validate_hierarchy()?;

        self.view
            .all_class_names()
            .iter()
            .map(|name| {
                let class = self.java_class(name)?;
                debug!(class = %class.name, fields = class.fields.len(), "built class document");
                Ok(ClassDocument::new(self.package.clone(), class))
            })
            .collect()
    }

    fn class_parent(&self, name: &str) -> GeneratorResult<Option<String>> {
        Ok(self.view.class_parent(name)?)
    }

    fn class_children(&self, name: &str) -> GeneratorResult<Vec<String>> {
        Ok(self.view.class_children(name)?)
    }

    fn class_own_slots(&self, name: &str) -> GeneratorResult<Vec<String>> {
        Ok(self.view.class_own_slots(name)?)
    }

    fn resolve_class(&self, name: &str) -> Option<String> {
        if self.view.get_class(name).is_some() {
            return Some(name.to_string());
        }
        self.view
            .all_class_names()
            .into_iter()
            .find(|candidate| to_pascal_case(candidate) == name)
    }

    fn class_name(&self, name: &str) -> String {
        to_pascal_case(name)
    }
}

/// Convert to `PascalCase`, keeping the case of everything but the first
/// letter of each word
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert to camelCase
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
