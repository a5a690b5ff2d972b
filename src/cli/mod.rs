//! CLI module for discernir
//!
//! This module contains all CLI command handlers and utilities.

mod args;
mod commands;
mod logging;

pub use args::{
    parse_args, AnalyzeArgs, Cli, Command, InitArgs, ModelsArgs, OutputFormat, TrainArgs,
    ValidateArgs,
};
pub use commands::run_command;
pub use logging::LogLevel;
