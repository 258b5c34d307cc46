//! Command-line interface for Java generation.
//!
//! Loads a `LinkML` schema, writes one Java class per schema class into the
//! output directory, and adds the visitor interface unless disabled.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use linkml_core::GeneratorConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{load_generator_config, validate_values};
use crate::generator::{
    AuxiliaryTemplate, GenerationReport, JavaGenerator, TemplateEmitter, VisitorInterface,
};

/// Generate a Java class hierarchy and visitor interface from a `LinkML` schema
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Schema file to generate from
    #[arg(value_parser = existing_file)]
    pub yamlfile: PathBuf,

    /// Directory generated files are written to [default: output]
    #[arg(long)]
    pub output_directory: Option<PathBuf>,

    /// Java package of the generated files
    #[arg(long)]
    pub package: Option<String>,

    /// Class at the top of the visited hierarchy
    #[arg(long)]
    pub visitor_root: Option<String>,

    /// Name of the generated visitor interface
    #[arg(long)]
    pub visitor_name: Option<String>,

    /// Do not generate the visitor interface or `accept` methods
    #[arg(long)]
    pub no_visitor: bool,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration file settings with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or the
    /// resulting settings are invalid
    pub fn generator_config(&self) -> linkml_core::Result<GeneratorConfig> {
        let mut config = load_generator_config(self.config.as_deref())?;

        if let Some(dir) = &self.output_directory {
            config.output_directory.clone_from(dir);
        }
        if let Some(package) = &self.package {
            config.package.clone_from(package);
        }
        if let Some(root) = &self.visitor_root {
            config.visitor.root_class.clone_from(root);
        }
        if let Some(name) = &self.visitor_name {
            config.visitor.interface_name.clone_from(name);
        }
        if self.no_visitor {
            config.visitor.enabled = false;
        }

        validate_values(&config)?;
        Ok(config)
    }
}

/// Install the `tracing` subscriber, honouring `RUST_LOG` when set
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "linkml_javagen=debug"
    } else {
        "linkml_javagen=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        debug!("tracing subscriber already installed");
    }
}

/// Run one generation
///
/// # Errors
///
/// Returns an error if the configuration or schema cannot be loaded, or if
/// generation fails
pub fn run(cli: &Cli) -> anyhow::Result<GenerationReport> {
    init_tracing(cli.verbose);

    let config = cli.generator_config().context("Invalid configuration")?;
    debug!(?config, "resolved configuration");

    let generator = JavaGenerator::from_file(&cli.yamlfile, &config)
        .with_context(|| format!("Failed to load schema {}", cli.yamlfile.display()))?;
    let emitter = TemplateEmitter::new(generator).with_visitor(config.visitor.clone());

    let visitor = VisitorInterface::new(&config.package, &config.visitor);
    let mut auxiliary: Vec<&dyn AuxiliaryTemplate> = Vec::new();
    if config.visitor.enabled {
        auxiliary.push(&visitor);
    }

    let report = emitter
        .generate(&config.output_directory, &auxiliary)
        .with_context(|| {
            format!(
                "Failed to generate Java code into {}",
                config.output_directory.display()
            )
        })?;

    print_summary(&report, &config, cli.verbose);
    Ok(report)
}

fn print_summary(report: &GenerationReport, config: &GeneratorConfig, verbose: bool) {
    println!(
        "{} Generated {} classes and {} auxiliary files in {}",
        "✓".green().bold(),
        report.class_files.len(),
        report.auxiliary_files.len(),
        config.output_directory.display().to_string().cyan()
    );
    if verbose {
        for path in report.class_files.iter().chain(&report.auxiliary_files) {
            println!("  {}", path.display());
        }
    }
}

/// Accept only paths to existing files
fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else if path.is_dir() {
        Err(format!("'{value}' is a directory"))
    } else {
        Err(format!("'{value}' does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> &str {
        path.to_str().expect("temp paths are UTF-8")
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_take_precedence() -> linkml_core::Result<()> {
        let dir = TempDir::new()?;
        let schema = dir.path().join("kgcl.yaml");
        fs::write(&schema, "id: k\nname: k\n")?;
        let config = dir.path().join("javagen.yaml");
        fs::write(&config, "package: org.from.file\noutput_directory: from-file\n")?;

        let cli = Cli::try_parse_from([
            "linkml-javagen",
            path_str(&schema),
            "--config",
            path_str(&config),
            "--package",
            "org.from.cli",
            "--no-visitor",
        ])
        .expect("valid arguments");

        let resolved = cli.generator_config()?;
        assert_eq!(resolved.package, "org.from.cli");
        assert_eq!(resolved.output_directory, PathBuf::from("from-file"));
        assert!(!resolved.visitor.enabled);
        Ok(())
    }

    #[test]
    fn test_flag_replaces_invalid_file_value() -> linkml_core::Result<()> {
        let dir = TempDir::new()?;
        let schema = dir.path().join("kgcl.yaml");
        fs::write(&schema, "id: k\nname: k\n")?;
        let config = dir.path().join("javagen.yaml");
        fs::write(&config, "package: \"org.bad pkg\"\n")?;

        let args = ["linkml-javagen", path_str(&schema), "--config", path_str(&config)];
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        assert!(cli.generator_config().is_err());

        let cli = Cli::try_parse_from(args.into_iter().chain(["--package", "org.good.model"]))
            .expect("valid arguments");
        assert_eq!(cli.generator_config()?.package, "org.good.model");
        Ok(())
    }

    #[test]
    fn test_default_output_directory() -> linkml_core::Result<()> {
        let dir = TempDir::new()?;
        let schema = dir.path().join("kgcl.yaml");
        fs::write(&schema, "id: k\nname: k\n")?;

        let cli = Cli::try_parse_from(["linkml-javagen", path_str(&schema)])
            .expect("valid arguments");
        assert_eq!(cli.generator_config()?.output_directory, PathBuf::from("output"));
        Ok(())
    }

    #[test]
    fn test_schema_must_be_an_existing_file() -> linkml_core::Result<()> {
        let dir = TempDir::new()?;
        assert!(Cli::try_parse_from(["linkml-javagen", path_str(dir.path())]).is_err());
        assert!(Cli::try_parse_from(["linkml-javagen", "/nonexistent/kgcl.yaml"]).is_err());
        Ok(())
    }
}
