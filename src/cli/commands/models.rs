//! Models command implementation

use crate::cli::args::{ModelsArgs, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::registry;
use serde_json::json;

pub fn run_models(args: ModelsArgs, level: LogLevel) -> Result<(), String> {
    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Registry models:");
            for id in registry::list_models() {
                let info = registry::model_info(id);
                let config = registry::default_config(id);
                println!();
                println!("{} ({id})", info.name);
                println!("  {}", info.description);
                println!(
                    "  epochs: {}  batch: {}  lr: {}  optimizer: {}  loss: {}  augmentation: {}",
                    config.epochs,
                    config.batch_size,
                    config.learning_rate,
                    config.optimizer,
                    config.loss_function,
                    if config.data_augmentation { "yes" } else { "no" }
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = registry::list_models()
                .map(|id| {
                    let info = registry::model_info(id);
                    json!({
                        "id": id,
                        "name": info.name,
                        "description": info.description,
                        "defaults": registry::default_config(id),
                    })
                })
                .collect();
            let rendered = serde_json::to_string_pretty(&entries)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{rendered}");
        }
    }

    Ok(())
}
