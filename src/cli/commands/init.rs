//! Init command implementation

use crate::cli::args::InitArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use std::fs;

const TEMPLATE: &str = "\
# discernir analyze spec
#
# Per-model class probabilities (from the inference engines) and the
# ensemble weights used to soft-vote them into a final decision.
ensemble:
  weights:
    resnet50: 0.33
    vit: 0.33
    random-forest: 0.34
  # tie_break: human-made
results:
  resnet50:
    ai_generated: 0.87
    human_made: 0.13
  vit:
    ai_generated: 0.91
    human_made: 0.09
  random-forest:
    ai_generated: 0.79
    human_made: 0.21
";

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    if args.path.exists() {
        return Err(format!(
            "Refusing to overwrite existing file: {}",
            args.path.display()
        ));
    }

    fs::write(&args.path, TEMPLATE)
        .map_err(|e| format!("Failed to write {}: {e}", args.path.display()))?;

    log(
        level,
        LogLevel::Normal,
        &format!("✓ Wrote template analyze spec to {}", args.path.display()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_spec, validate_spec};

    #[test]
    fn test_init_writes_valid_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analyze.yaml");

        let args = InitArgs { path: path.clone() };
        run_init(args, LogLevel::Quiet).unwrap();

        let spec = load_spec(&path).unwrap();
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analyze.yaml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs { path: path.clone() };
        let err = run_init(args, LogLevel::Quiet).unwrap_err();
        assert!(err.contains("Refusing to overwrite"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }
}
