//! Training session lifecycle
//!
//! Per-model training orchestration:
//! - Hyperparameter configuration (`TrainConfig`)
//! - Explicit lifecycle state machine (`SessionState`)
//! - Epoch progress bookkeeping driven by external ticks
//! - Metric snapshot storage and history
//! - A manager owning one independently lockable session per model
//!
//! The manager governs orchestration only; the numerical work of training
//! happens in an external engine that reports back via `update_metrics`.
//!
//! # Example
//!
//! ```
//! use discernir::registry::ModelId;
//! use discernir::session::{TrainingMetrics, TrainingSessionManager};
//!
//! let manager = TrainingSessionManager::new();
//! manager.start_or_pause(ModelId::Resnet50)?;
//!
//! // One tick per external time unit while training
//! manager.tick(ModelId::Resnet50)?;
//! manager.update_metrics(ModelId::Resnet50, TrainingMetrics::new(0.9, 1.0, 0.55, 0.5))?;
//!
//! let snap = manager.snapshot(ModelId::Resnet50)?;
//! assert_eq!(snap.progress.current_epoch, 1);
//! # Ok::<(), discernir::Error>(())
//! ```

mod config;
mod manager;
mod metrics;
mod session;
mod state;


pub use config::TrainConfig;
pub use manager::TrainingSessionManager;
pub use metrics::{EpochMetrics, MetricsHistory, TrainingMetrics};
pub use session::{SessionSnapshot, TrainingProgress, TrainingSession};
pub use state::SessionState;
