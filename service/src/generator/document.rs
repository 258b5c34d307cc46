//! Per-class documents handed to templates

use std::collections::BTreeSet;

/// Imports every generated class carries
const BASE_IMPORTS: [&str; 3] = ["java.util.List", "lombok.Data", "lombok.EqualsAndHashCode"];

/// A single field of a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name in generated code
    pub name: String,
    /// Resolved target type, e.g. `String` or `List<Node>`
    pub range: String,
    /// Name of the slot the field comes from
    pub slot_name: String,
}

/// A class as seen by the class template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
    /// Class name in generated code
    pub name: String,
    /// Class name in the schema
    pub source_name: String,
    /// Class description, if the schema has one
    pub description: Option<String>,
    /// Generated name of the `is_a` parent
    pub is_a: Option<String>,
    /// Whether the schema marks the class abstract
    pub is_abstract: bool,
    /// Fields the class declares itself
    pub fields: Vec<Field>,
    /// All fields, inherited ones included
    pub all_fields: Vec<Field>,
}

impl JavaClass {
    /// True if `name` is either the schema name or the generated name
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.source_name == name
    }

    /// Javadoc body for the class: the description, HTML-escaped, with
    /// continuation lines prefixed
    #[must_use]
    pub fn doc_comment(&self) -> Option<String> {
        self.description.as_deref().map(|text| {
            escape_javadoc(text.trim_end())
                .lines()
                .collect::<Vec<_>>()
                .join("\n * ")
        })
    }
}

/// Everything rendered into one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDocument {
    /// Document name, which is also the output file stem
    pub name: String,
    /// Java package of the file
    pub package: String,
    /// Sorted imports
    pub imports: Vec<String>,
    /// The one class this document holds
    pub class: JavaClass,
}

impl ClassDocument {
    /// Build a document around a class, deriving its imports from the
    /// field types
    #[must_use]
    pub fn new(package: impl Into<String>, class: JavaClass) -> Self {
        let mut imports: BTreeSet<String> = BASE_IMPORTS.iter().map(ToString::to_string).collect();
        for field in &class.fields {
            imports.extend(
                type_import(&field.range)
                    .into_iter()
                    .map(ToString::to_string),
            );
        }

        Self {
            name: class.name.clone(),
            package: package.into(),
            imports: imports.into_iter().collect(),
            class,
        }
    }

    /// Output file name
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}.java", self.name)
    }
}

/// Import needed for a field type, looking inside `List<...>`
fn type_import(range: &str) -> Option<&'static str> {
    let inner = range
        .strip_prefix("List<")
        .and_then(|r| r.strip_suffix('>'))
        .unwrap_or(range);
    match inner {
        "BigDecimal" => Some("java.math.BigDecimal"),
        "Instant" => Some("java.time.Instant"),
        "LocalDate" => Some("java.time.LocalDate"),
        "ZonedDateTime" => Some("java.time.ZonedDateTime"),
        _ => None,
    }
}

fn escape_javadoc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    // keep the comment from being closed early
    escaped.replace("*/", "*&#47;")
}
