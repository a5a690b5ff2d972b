//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! discernir models
//! discernir train resnet50 --epochs 10 --seed 42
//! discernir analyze analyze.yaml
//! discernir validate analyze.yaml --detailed
//! discernir init analyze.yaml
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Discernir: ensemble training orchestration & soft-voting decisions
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "discernir")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Training orchestration and soft-voting ensemble decisions for AI-vs-human image detection")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List registry models and their default hyperparameters
    Models(ModelsArgs),

    /// Run one model's training session to completion
    Train(TrainArgs),

    /// Combine per-model results from an analyze spec into a decision
    Analyze(AnalyzeArgs),

    /// Validate an analyze spec without combining
    Validate(ValidateArgs),

    /// Write a template analyze spec
    Init(InitArgs),
}

/// Output format for machine-readable commands
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the models command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Registry model to train (resnet50, vit, random-forest)
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Override number of epochs
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override learning rate
    #[arg(short, long)]
    pub lr: Option<f32>,

    /// Random seed for the simulated metric curves
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Path to a YAML analyze spec
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to a YAML analyze spec
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Show a detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Where to write the template spec
    #[arg(value_name = "PATH", default_value = "analyze.yaml")]
    pub path: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
