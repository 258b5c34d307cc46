//! `linkml-javagen` command-line tool
//!
//! Generates Java classes and a visitor interface from a `LinkML` schema.

use clap::Parser;
use colored::Colorize;
use linkml_javagen::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
