//! Configuration loading for the Java generator
//!
//! This module provides configuration loading from YAML files with
//! environment variable substitution support.

use linkml_core::{GeneratorConfig, LinkMLError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::debug;

/// Matches `${VAR}` and `${VAR:-default}`
static ENV_VAR_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").ok());

/// Load configuration from `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `LinkMLError::IoError` if the file cannot be read
/// Returns `LinkMLError::ConfigError` if the YAML cannot be parsed
pub fn load_config<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(LinkMLError::IoError)?;
    let substituted = substitute_env_vars(&contents);

    serde_yaml::from_str(&substituted)
        .map_err(|e| LinkMLError::ConfigError(format!("Failed to parse YAML config: {e}")))
}

/// Load the generator configuration, falling back to defaults when no file
/// is given
///
/// Values are not validated here; callers apply their overrides first and
/// then call [`validate_values`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_generator_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading generator configuration");
            load_config(path)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

/// Validate specific configuration values
///
/// # Errors
///
/// Returns `LinkMLError::ConfigError` if:
/// - The package is not a dotted sequence of Java identifiers
/// - The visitor interface or root class name is empty
/// - The maximum import depth is zero
pub fn validate_values(config: &GeneratorConfig) -> Result<()> {
    if !config.package.split('.').all(is_java_identifier) {
        return Err(LinkMLError::config(format!(
            "'{}' is not a valid Java package name",
            config.package
        )));
    }
    if !is_java_identifier(&config.visitor.interface_name) {
        return Err(LinkMLError::config(format!(
            "'{}' is not a valid Java interface name",
            config.visitor.interface_name
        )));
    }
    if config.visitor.root_class.trim().is_empty() {
        return Err(LinkMLError::config("Visitor root class must not be empty"));
    }
    if config.schema.max_import_depth == 0 {
        return Err(LinkMLError::config("max_import_depth must be at least 1"));
    }
    Ok(())
}

/// Substitute environment variables in the format ${VAR:-default}
fn substitute_env_vars(content: &str) -> String {
    let Some(re) = ENV_VAR_PATTERN.as_ref() else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        env::var(var_name).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
