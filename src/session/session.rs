//! Per-model training session aggregate

use super::config::TrainConfig;
use super::metrics::{MetricsHistory, TrainingMetrics};
use super::state::SessionState;
use crate::error::{Error, Result};
use crate::registry::ModelId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Epoch progress of a session
///
/// Owned exclusively by the containing [`TrainingSession`]; nothing else
/// mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrainingProgress {
    /// Epochs finished so far (0 <= value <= configured epochs)
    pub current_epoch: usize,
    /// Lifecycle state
    pub state: SessionState,
}

impl TrainingProgress {
    /// Whether the session is actively training
    pub fn is_training(&self) -> bool {
        self.state == SessionState::Training
    }

    /// Completed fraction of the planned epochs, in [0, 1]
    pub fn fraction_complete(&self, epochs: usize) -> f32 {
        if epochs == 0 {
            return 0.0;
        }
        self.current_epoch as f32 / epochs as f32
    }
}

/// Consistent copy of a session's observable state
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    /// Which model this session trains
    pub model: ModelId,
    /// Hyperparameters the session was created with
    pub config: TrainConfig,
    /// Epoch progress and lifecycle state
    pub progress: TrainingProgress,
    /// Latest externally supplied metric snapshot
    pub metrics: TrainingMetrics,
    /// When training first started, if it ever did
    pub started_at: Option<DateTime<Utc>>,
}

/// Mutable state for one model's training lifecycle
///
/// Sessions are created by the manager at construction and mutated only
/// through manager operations; external code observes them via
/// [`SessionSnapshot`] copies.
#[derive(Debug)]
pub struct TrainingSession {
    model: ModelId,
    config: TrainConfig,
    progress: TrainingProgress,
    metrics: TrainingMetrics,
    history: MetricsHistory,
    started_at: Option<DateTime<Utc>>,
}

impl TrainingSession {
    /// Create an idle session at epoch 0
    pub(crate) fn new(model: ModelId, config: TrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model,
            config,
            progress: TrainingProgress {
                current_epoch: 0,
                state: SessionState::Idle,
            },
            metrics: TrainingMetrics::default(),
            history: MetricsHistory::new(),
            started_at: None,
        })
    }

    /// Toggle between Idle and Training
    ///
    /// The sole lifecycle transition: pausing keeps `current_epoch`, and
    /// resuming continues from it. Completed sessions reject the call.
    pub(crate) fn start_or_pause(&mut self) -> Result<SessionState> {
        match self.progress.state {
            SessionState::Completed => {
                Err(Error::SessionCompleted(self.model, self.config.epochs))
            }
            SessionState::Idle => {
                self.progress.state = SessionState::Training;
                if self.started_at.is_none() {
                    self.started_at = Some(Utc::now());
                }
                Ok(self.progress.state)
            }
            SessionState::Training => {
                self.progress.state = SessionState::Idle;
                Ok(self.progress.state)
            }
        }
    }

    /// Advance one epoch while training
    ///
    /// No-op unless the session is Training. Reaching the configured
    /// epoch total completes the session and forces training off.
    pub(crate) fn tick(&mut self) -> TrainingProgress {
        if self.progress.state == SessionState::Training {
            if self.progress.current_epoch < self.config.epochs {
                self.progress.current_epoch += 1;
            }
            if self.progress.current_epoch == self.config.epochs {
                self.progress.state = SessionState::Completed;
            }
        }
        self.progress
    }

    /// Replace the stored metric snapshot
    ///
    /// Legal in every state: a final metrics report may arrive after
    /// completion.
    pub(crate) fn update_metrics(&mut self, metrics: TrainingMetrics) {
        self.metrics = metrics;
        self.history.record(self.progress.current_epoch, metrics);
    }

    /// Copy-on-read view of the session
    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            model: self.model,
            config: self.config.clone(),
            progress: self.progress,
            metrics: self.metrics,
            started_at: self.started_at,
        }
    }

    /// Recorded metric history, oldest first
    pub(crate) fn history(&self) -> &MetricsHistory {
        &self.history
    }
}
