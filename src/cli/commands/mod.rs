//! CLI command implementations

mod analyze;
mod init;
mod models;
mod train;
mod validate;

use crate::cli::args::{Cli, Command};
use crate::cli::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Models(args) => models::run_models(args, log_level),
        Command::Train(args) => train::run_train(args, log_level),
        Command::Analyze(args) => analyze::run_analyze(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}
