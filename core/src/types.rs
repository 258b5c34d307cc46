//! Core type definitions for `LinkML` schemas

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Schema definition - the root of a `LinkML` schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaDefinition {
    /// Unique identifier for the schema
    #[serde(default)]
    pub id: String,

    /// Name of the schema
    #[serde(default)]
    pub name: String,

    /// Human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Default prefix for the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,

    /// Default range for slots that declare none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_range: Option<String>,

    /// Prefix declarations
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub prefixes: IndexMap<String, PrefixDefinition>,

    /// Import statements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Class definitions, in declaration order
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub classes: IndexMap<String, ClassDefinition>,

    /// Slot definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub slots: IndexMap<String, SlotDefinition>,

    /// Type definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub types: IndexMap<String, TypeDefinition>,

    /// Enum definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub enums: IndexMap<String, EnumDefinition>,
}

/// Class definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassDefinition {
    /// Name of the class
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is this class abstract?
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,

    /// Is this a mixin?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<bool>,

    /// Parent class (single inheritance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    /// Mixin classes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    /// Slots used by this class
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<String>,

    /// Slot usage overrides
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub slot_usage: IndexMap<String, SlotDefinition>,

    /// Attributes (inline slots)
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub attributes: IndexMap<String, SlotDefinition>,

    /// Class URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_uri: Option<String>,

    /// Tree root flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_root: Option<bool>,
}

/// Slot definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotDefinition {
    /// Name of the slot
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Range (type, class or enum name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Is this slot required?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Can this slot have multiple values?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multivalued: Option<bool>,

    /// Is this slot an identifier?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<bool>,

    /// Is this slot a key?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<bool>,

    /// Should referenced objects be inlined?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlined: Option<bool>,

    /// Slot URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_uri: Option<String>,

    /// Parent slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,
}

/// Type definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypeDefinition {
    /// Name of the type
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parent type
    #[serde(skip_serializing_if = "Option::is_none", rename = "typeof")]
    pub base_type: Option<String>,

    /// Python base type of builtin types (`str`, `int`, `float`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Type URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Enum definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnumDefinition {
    /// Name of the enum
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permissible values keyed by their text
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_named_map"
    )]
    pub permissible_values: IndexMap<String, PermissibleValue>,
}

/// A permissible value of an enum
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PermissibleValue {
    /// Value text
    #[serde(default)]
    pub text: String,

    /// Description of this permissible value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Meaning URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// Prefix definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PrefixDefinition {
    /// Simple string expansion
    Simple(String),
    /// Complex prefix with reference
    Complex {
        /// Prefix expansion
        prefix_prefix: String,
        /// Reference URL
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix_reference: Option<String>,
    },
}

/// Schema elements that are keyed by name inside their parent map
pub trait Named {
    /// Mutable access to the element name
    fn name_mut(&mut self) -> &mut String;
}

impl Named for ClassDefinition {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }
}

impl Named for SlotDefinition {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }
}

impl Named for TypeDefinition {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }
}

impl Named for EnumDefinition {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }
}

impl Named for PermissibleValue {
    fn name_mut(&mut self) -> &mut String {
        &mut self.text
    }
}

/// Deserialize a `name -> element` map where an element body may be empty
/// (`Change:` with nothing under it) and the name defaults to the map key.
fn deserialize_named_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + Named,
{
    let raw: Option<IndexMap<String, Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let mut element = value.unwrap_or_default();
            let name = element.name_mut();
            if name.is_empty() {
                name.clone_from(&key);
            }
            (key, element)
        })
        .collect())
}

impl SchemaDefinition {
    /// Create a new schema definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("https://example.org/{name}"),
            name,
            ..Default::default()
        }
    }
}

impl ClassDefinition {
    /// Create a new class definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the class is declared abstract
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.abstract_.unwrap_or(false)
    }
}

impl SlotDefinition {
    /// Create a new slot definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the slot holds a list of values
    #[must_use]
    pub fn is_multivalued(&self) -> bool {
        self.multivalued.unwrap_or(false)
    }
}
