//! Train command implementation
//!
//! Drives a real session through the manager tick-by-tick. The numeric
//! training itself is out of scope for the core, so a seeded simulation
//! stands in for the external engine and reports plausible metric curves
//! through `update_metrics`.

use crate::cli::args::TrainArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::registry::{self, ModelId};
use crate::session::{SessionState, TrainConfig, TrainingMetrics, TrainingSessionManager};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn run_train(args: TrainArgs, level: LogLevel) -> Result<(), String> {
    let model: ModelId = args.model.parse().map_err(|e| format!("{e}"))?;

    let config = apply_overrides(registry::default_config(model), &args);
    config.validate().map_err(|e| format!("{e}"))?;
    let epochs = config.epochs;

    let manager = TrainingSessionManager::new()
        .with_config(model, config)
        .map_err(|e| format!("{e}"))?;

    let info = registry::model_info(model);
    log(
        level,
        LogLevel::Normal,
        &format!("Training {} for {epochs} epochs", info.name),
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    manager.start_or_pause(model).map_err(|e| format!("{e}"))?;

    loop {
        let progress = manager.tick(model).map_err(|e| format!("{e}"))?;
        let epoch = progress.current_epoch;

        let metrics = simulate_epoch_metrics(&mut rng, epoch, epochs);
        manager
            .update_metrics(model, metrics)
            .map_err(|e| format!("{e}"))?;

        log(
            level,
            LogLevel::Normal,
            &format!(
                "Epoch {epoch}/{epochs}: loss: {:.4}, val_loss: {:.4}, acc: {:.3}, val_acc: {:.3}",
                metrics.training_loss,
                metrics.validation_loss,
                metrics.training_accuracy,
                metrics.validation_accuracy
            ),
        );

        if progress.state == SessionState::Completed {
            break;
        }
    }

    let snapshot = manager.snapshot(model).map_err(|e| format!("{e}"))?;
    let history = manager.history(model).map_err(|e| format!("{e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("✓ Training complete: {epochs} epochs"),
    );
    if let Some(best) = history
        .iter()
        .map(|e| e.metrics.validation_loss)
        .fold(None::<f32>, |best, v| match best {
            Some(b) if b <= v => Some(b),
            _ => Some(v),
        })
    {
        log(
            level,
            LogLevel::Verbose,
            &format!("Best validation loss: {best:.4}"),
        );
    }
    if let Some(started) = snapshot.started_at {
        log(
            level,
            LogLevel::Verbose,
            &format!("Started at: {}", started.to_rfc3339()),
        );
    }

    Ok(())
}

fn apply_overrides(mut config: TrainConfig, args: &TrainArgs) -> TrainConfig {
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(lr) = args.lr {
        config.learning_rate = lr;
    }
    config
}

/// Plausible metric curves: decaying loss, rising accuracy, mild jitter
fn simulate_epoch_metrics(rng: &mut StdRng, epoch: usize, total: usize) -> TrainingMetrics {
    let progress = epoch as f32 / total.max(1) as f32;
    let jitter = rng.gen_range(-0.02..0.02f32);

    let training_loss = (1.8 * (-3.0 * progress).exp() + 0.12 + jitter).max(0.01);
    let validation_loss = training_loss * rng.gen_range(1.05..1.25f32);
    let training_accuracy = (0.5 + 0.47 * progress + jitter).clamp(0.0, 1.0);
    let validation_accuracy = (training_accuracy - rng.gen_range(0.01..0.04f32)).clamp(0.0, 1.0);

    TrainingMetrics::new(
        training_loss,
        validation_loss,
        training_accuracy,
        validation_accuracy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train_args(model: &str) -> TrainArgs {
        TrainArgs {
            model: model.to_string(),
            epochs: None,
            batch_size: None,
            lr: None,
            seed: Some(7),
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = run_train(train_args("alexnet"), LogLevel::Quiet).unwrap_err();
        assert!(err.contains("alexnet"));
    }

    #[test]
    fn test_train_runs_to_completion() {
        let mut args = train_args("resnet50");
        args.epochs = Some(3);
        assert!(run_train(args, LogLevel::Quiet).is_ok());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut args = train_args("vit");
        args.epochs = Some(0);
        assert!(run_train(args, LogLevel::Quiet).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let args = TrainArgs {
            model: "vit".to_string(),
            epochs: Some(5),
            batch_size: Some(4),
            lr: Some(0.01),
            seed: None,
        };
        let config = apply_overrides(registry::default_config(ModelId::Vit), &args);
        assert_eq!(config.epochs, 5);
        assert_eq!(config.batch_size, 4);
        assert!((config.learning_rate - 0.01).abs() < 1e-6);
        // Non-overridden fields keep their defaults
        assert_eq!(config.optimizer, "AdamW");
    }

    #[test]
    fn test_simulated_metrics_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for epoch in 1..=50 {
            let metrics = simulate_epoch_metrics(&mut rng, epoch, 50);
            assert!(metrics.is_valid(), "invalid metrics at epoch {epoch}");
        }
    }

    #[test]
    fn test_simulated_loss_trends_down() {
        let mut rng = StdRng::seed_from_u64(42);
        let early = simulate_epoch_metrics(&mut rng, 1, 50);
        let late = simulate_epoch_metrics(&mut rng, 50, 50);
        assert!(late.training_loss < early.training_loss);
        assert!(late.training_accuracy > early.training_accuracy);
    }
}
