//! Import resolution for `LinkML` schemas
//!
//! Imports are resolved relative to the directory of the importing file.
//! Imports in the `linkml:` namespace refer to the builtin metamodel types and
//! are never loaded from disk.

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Parser;

/// Prefix of imports that refer to the builtin `LinkML` types
const BUILTIN_IMPORT_PREFIX: &str = "linkml:";

/// Import resolver for handling schema imports
#[derive(Debug, Clone)]
pub struct ImportResolver {
    /// Maximum import depth to prevent runaway nesting
    max_depth: usize,
}

impl Default for ImportResolver {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ImportResolver {
    /// Create a new import resolver
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Merge every schema imported (directly or transitively) by `schema`,
    /// which was loaded from `schema_path`.
    ///
    /// Elements already defined by an importing schema take precedence over
    /// imported ones. Each file is loaded at most once.
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ImportError` if an import cannot be found or the
    /// maximum depth is exceeded, and parse errors from imported files.
    pub fn resolve(&self, mut schema: SchemaDefinition, schema_path: &Path) -> Result<SchemaDefinition> {
        let mut visited = HashSet::new();
        visited.insert(canonical(schema_path));
        let base_dir = schema_path.parent().unwrap_or_else(|| Path::new("."));

        self.resolve_recursive(&mut schema, base_dir, &mut visited, 1)?;
        Ok(schema)
    }

    fn resolve_recursive(
        &self,
        schema: &mut SchemaDefinition,
        base_dir: &Path,
        visited: &mut HashSet<PathBuf>,
        depth: usize,
    ) -> Result<()> {
        let imports: Vec<String> = schema.imports.clone();
        for import in imports {
            if import.starts_with(BUILTIN_IMPORT_PREFIX) {
                debug!(import = %import, "skipping builtin import");
                continue;
            }
            if depth > self.max_depth {
                return Err(LinkMLError::import(
                    &import,
                    format!("Maximum import depth ({}) exceeded", self.max_depth),
                ));
            }

            let path = Self::find_import_file(base_dir, &import)?;
            if !visited.insert(canonical(&path)) {
                continue;
            }

            debug!(import = %import, path = %path.display(), "loading import");
            let mut imported = Parser::new().parse_file(&path).map_err(|e| {
                LinkMLError::import(&import, e.to_string())
            })?;
            let import_dir = path.parent().unwrap_or(base_dir).to_path_buf();
            self.resolve_recursive(&mut imported, &import_dir, visited, depth + 1)?;

            Self::merge_schema(schema, imported);
        }

        Ok(())
    }

    /// Find the file for an import
    fn find_import_file(base_dir: &Path, import: &str) -> Result<PathBuf> {
        let candidates = [
            base_dir.join(format!("{import}.yaml")),
            base_dir.join(format!("{import}.yml")),
            base_dir.join(import),
        ];

        candidates
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| {
                LinkMLError::import(
                    import,
                    format!("Import file not found in {}", base_dir.display()),
                )
            })
    }

    /// Merge an imported schema into the current schema
    fn merge_schema(target: &mut SchemaDefinition, source: SchemaDefinition) {
        for (prefix, def) in source.prefixes {
            target.prefixes.entry(prefix).or_insert(def);
        }
        for (name, class) in source.classes {
            target.classes.entry(name).or_insert(class);
        }
        for (name, slot) in source.slots {
            target.slots.entry(name).or_insert(slot);
        }
        for (name, type_def) in source.types {
            target.types.entry(name).or_insert(type_def);
        }
        for (name, enum_def) in source.enums {
            target.enums.entry(name).or_insert(enum_def);
        }
        if target.default_range.is_none() {
            target.default_range = source.default_range;
        }
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("write schema file");
        path
    }

    #[test]
    fn test_merges_local_imports_and_skips_builtins() -> Result<()> {
        let dir = TempDir::new()?;
        write(
            dir.path(),
            "basics.yaml",
            r"
id: https://w3id.org/kgcl/basics
name: basics
classes:
  Activity:
    description: Imported description
  Change:
    description: Should not override the importer
slots:
  was_generated_by:
    range: Activity
",
        );
        let main = write(
            dir.path(),
            "kgcl.yaml",
            r"
id: https://w3id.org/kgcl
name: kgcl
imports:
  - linkml:types
  - basics
classes:
  Change:
    description: Any change
",
        );

        let schema = Parser::new().parse_file(&main)?;
        let merged = ImportResolver::default().resolve(schema, &main)?;

        let names: Vec<&String> = merged.classes.keys().collect();
        assert_eq!(names, vec!["Change", "Activity"]);
        assert_eq!(merged.classes["Change"].description.as_deref(), Some("Any change"));
        assert!(merged.slots.contains_key("was_generated_by"));
        Ok(())
    }

    #[test]
    fn test_import_cycles_are_loaded_once() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "a.yaml", "id: a\nname: a\nimports: [b]\nclasses:\n  A:\n");
        write(dir.path(), "b.yaml", "id: b\nname: b\nimports: [a]\nclasses:\n  B:\n");
        let main = dir.path().join("a.yaml");

        let schema = Parser::new().parse_file(&main)?;
        let merged = ImportResolver::default().resolve(schema, &main)?;
        assert_eq!(merged.classes.len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_import_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let main = write(dir.path(), "kgcl.yaml", "id: k\nname: k\nimports: [nowhere]\n");

        let schema = Parser::new().parse_file(&main)?;
        let err = ImportResolver::default()
            .resolve(schema, &main)
            .expect_err("import cannot be found");
        match err {
            LinkMLError::ImportError { import, .. } => assert_eq!(import, "nowhere"),
            other => panic!("Expected ImportError, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_depth_limit() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "c.yaml", "id: c\nname: c\nclasses:\n  C:\n");
        write(dir.path(), "b.yaml", "id: b\nname: b\nimports: [c]\n");
        let main = write(dir.path(), "a.yaml", "id: a\nname: a\nimports: [b]\n");

        let schema = Parser::new().parse_file(&main)?;
        let err = ImportResolver::new(1)
            .resolve(schema, &main)
            .expect_err("depth limit of one forbids nested imports");
        assert!(err.to_string().contains("Maximum import depth (1) exceeded"));
        Ok(())
    }
}
