//! End-to-end CLI integration tests
//!
//! These tests execute the `linkml-javagen` binary via `std::process::Command`
//! to validate the complete workflow from command line to output files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SCHEMA: &str = r"
id: https://w3id.org/kgcl
name: kgcl
classes:
  Change:
    slots:
      - id
  NodeDeletion:
    is_a: Change
slots:
  id:
";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linkml-javagen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute linkml-javagen")
}

fn setup() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("kgcl.yaml"), SCHEMA).expect("Failed to write schema");
    temp_dir
}

#[test]
fn test_generates_into_default_output_directory() {
    let temp_dir = setup();
    let output = run_in(temp_dir.path(), &["kgcl.yaml"]);

    assert!(
        output.status.success(),
        "linkml-javagen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let out_dir = temp_dir.path().join("output");
    for name in ["Change.java", "NodeDeletion.java", "IChangeVisitor.java"] {
        assert!(out_dir.join(name).is_file(), "{name} was not created");
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated 2 classes and 1 auxiliary files"));
}

#[test]
fn test_output_directory_and_package_flags() {
    let temp_dir = setup();
    let output = run_in(
        temp_dir.path(),
        &[
            "kgcl.yaml",
            "--output-directory",
            "src/main/java",
            "--package",
            "org.example.kgcl",
        ],
    );

    assert!(
        output.status.success(),
        "linkml-javagen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let change = fs::read_to_string(temp_dir.path().join("src/main/java/Change.java"))
        .expect("Change.java was not created");
    assert!(change.starts_with("package org.example.kgcl;"));
    assert!(!temp_dir.path().join("output").exists());
}

#[test]
fn test_no_visitor_flag() {
    let temp_dir = setup();
    let output = run_in(temp_dir.path(), &["kgcl.yaml", "--no-visitor"]);

    assert!(output.status.success());
    let out_dir = temp_dir.path().join("output");
    assert!(!out_dir.join("IChangeVisitor.java").exists());
    let change = fs::read_to_string(out_dir.join("Change.java")).expect("Change.java");
    assert!(!change.contains("accept("));
}

#[test]
fn test_config_file() {
    let temp_dir = setup();
    fs::write(
        temp_dir.path().join("javagen.yaml"),
        "output_directory: generated\nvisitor:\n  interface_name: IEditVisitor\n",
    )
    .expect("Failed to write config");

    let output = run_in(temp_dir.path(), &["kgcl.yaml", "--config", "javagen.yaml"]);

    assert!(
        output.status.success(),
        "linkml-javagen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let visitor = fs::read_to_string(temp_dir.path().join("generated/IEditVisitor.java"))
        .expect("IEditVisitor.java was not created");
    assert!(visitor.contains("public interface IEditVisitor<T> {"));
}

#[test]
fn test_missing_schema_fails_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["missing.yaml"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!temp_dir.path().join("output").exists());
}

#[test]
fn test_directory_is_not_a_schema() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["."]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is a directory"));
}

#[test]
fn test_invalid_schema_exits_non_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("broken.yaml"),
        "classes:\n  NodeDeletion:\n    is_a: Change\n",
    )
    .expect("Failed to write schema");

    let output = run_in(temp_dir.path(), &["broken.yaml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("undefined parent class 'Change'"));
}
