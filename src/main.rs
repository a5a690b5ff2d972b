//! Discernir CLI
//!
//! Command-line entry point for the discernir library.
//!
//! # Usage
//!
//! ```bash
//! # List registry models and their defaults
//! discernir models
//!
//! # Run a training session with overrides
//! discernir train resnet50 --epochs 10 --seed 42
//!
//! # Combine per-model results into an ensemble decision
//! discernir analyze analyze.yaml
//!
//! # Validate a spec without combining
//! discernir validate analyze.yaml
//!
//! # Write a template spec
//! discernir init analyze.yaml
//! ```

use clap::Parser;
use discernir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
