//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, validate_spec};

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.spec).map_err(|e| format!("{e}"))?;

    match validate_spec(&spec) {
        Ok(()) => {
            log(level, LogLevel::Normal, "✓ Spec is valid");
            if args.detailed {
                let weight_sum: f64 = spec.ensemble.weights.values().sum();
                println!("  models: {}", spec.results.len());
                println!("  weight sum: {weight_sum}");
                println!("  tie break: {:?}", spec.ensemble.tie_break);
            }
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("  ✗ {error}");
            }
            Err(format!("Spec failed validation with {} error(s)", errors.len()))
        }
    }
}
