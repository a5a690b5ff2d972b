//! Analyze command implementation

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, validate_spec};
use crate::ensemble::Label;
use crate::registry;

pub fn run_analyze(args: AnalyzeArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.spec).map_err(|e| format!("{e}"))?;

    if let Err(errors) = validate_spec(&spec) {
        for error in &errors {
            eprintln!("  ✗ {error}");
        }
        return Err(format!("Spec failed validation with {} error(s)", errors.len()));
    }

    let results = spec.results();
    let weights = spec.weights();
    let decision = spec
        .aggregator()
        .combine(&results, &weights)
        .map_err(|e| format!("{e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Soft Voting Ensemble");
            println!();
            for (model, result) in &results {
                let info = registry::model_info(*model);
                println!(
                    "  {:<28} AI: {:>5.1}% | Human: {:>5.1}%   weight {:>5.1}%",
                    info.name,
                    result.probability(Label::AiGenerated) * 100.0,
                    result.probability(Label::HumanMade) * 100.0,
                    decision.weights[model] * 100.0
                );
            }
            println!();
            println!(
                "Final ensemble decision: {} (confidence {}%)",
                decision.prediction, decision.confidence
            );
            log(
                level,
                LogLevel::Verbose,
                &format!(
                    "Aggregated scores: AI {:.4}, Human {:.4}",
                    decision.scores.ai_generated, decision.scores.human_made
                ),
            );
        }
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&decision)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{rendered}");
        }
    }

    Ok(())
}
