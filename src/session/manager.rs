//! Training session manager
//!
//! Owns one session per registry model and provides the only mutation
//! surface for training lifecycle and progress. Each session sits behind
//! its own lock, so models train, pause, and tick independently with no
//! cross-session ordering.

use super::config::TrainConfig;
use super::metrics::{EpochMetrics, TrainingMetrics};
use super::session::{SessionSnapshot, TrainingProgress, TrainingSession};
use super::state::SessionState;
use crate::error::{Error, Result};
use crate::registry::{self, ModelId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Owner of the full set of training sessions
///
/// Created with a session for every registry model. Mutations on a single
/// session are serialized by its lock; `snapshot` hands back a consistent
/// copy and may run concurrently with in-flight mutation on other models.
///
/// # Example
///
/// ```
/// use discernir::registry::ModelId;
/// use discernir::session::TrainingSessionManager;
///
/// let manager = TrainingSessionManager::new();
/// manager.start_or_pause(ModelId::Vit)?;
/// manager.tick(ModelId::Vit)?;
/// let snap = manager.snapshot(ModelId::Vit)?;
/// assert_eq!(snap.progress.current_epoch, 1);
/// # Ok::<(), discernir::Error>(())
/// ```
#[derive(Debug)]
pub struct TrainingSessionManager {
    sessions: HashMap<ModelId, Mutex<TrainingSession>>,
}

impl TrainingSessionManager {
    /// Create a manager with a default-configured session per registry model
    pub fn new() -> Self {
        let sessions = registry::list_models()
            .map(|id| {
                let session = TrainingSession::new(id, registry::default_config(id))
                    .expect("registry default configs are valid");
                (id, Mutex::new(session))
            })
            .collect();
        Self { sessions }
    }

    /// Create a manager covering only a subset of the registry
    ///
    /// Operations on models outside the subset fail with `UnknownModel`.
    pub fn with_models(models: &[ModelId]) -> Self {
        let sessions = models
            .iter()
            .map(|&id| {
                let session = TrainingSession::new(id, registry::default_config(id))
                    .expect("registry default configs are valid");
                (id, Mutex::new(session))
            })
            .collect();
        Self { sessions }
    }

    /// Replace one model's configuration before training starts
    ///
    /// Consumes the manager so configuration happens only at construction
    /// time; the session restarts idle at epoch 0 under the new config.
    pub fn with_config(mut self, model: ModelId, config: TrainConfig) -> Result<Self> {
        if !self.sessions.contains_key(&model) {
            return Err(Error::UnknownModel(model.to_string()));
        }
        let session = TrainingSession::new(model, config)?;
        self.sessions.insert(model, Mutex::new(session));
        Ok(self)
    }

    /// Models with a live session, in registry order
    pub fn models(&self) -> Vec<ModelId> {
        registry::list_models()
            .filter(|id| self.sessions.contains_key(id))
            .collect()
    }

    /// Toggle a session between Idle and Training
    ///
    /// Flips the training flag and nothing else; there is no separate
    /// stop/reset, and resuming continues from the last epoch. Fails with
    /// `SessionCompleted` on a terminal session.
    pub fn start_or_pause(&self, model: ModelId) -> Result<SessionState> {
        self.session(model)?.start_or_pause()
    }

    /// Advance a session one epoch
    ///
    /// Driven by an external scheduler once per time unit while the
    /// session trains. Returns immediately; ticking an Idle or Completed
    /// session is a no-op.
    pub fn tick(&self, model: ModelId) -> Result<TrainingProgress> {
        Ok(self.session(model)?.tick())
    }

    /// Advance every actively training session one epoch
    pub fn tick_all(&self) {
        for session in self.sessions.values() {
            lock_recovered(session).tick();
        }
    }

    /// Consistent, immutable copy of a session's state
    pub fn snapshot(&self, model: ModelId) -> Result<SessionSnapshot> {
        Ok(self.session(model)?.snapshot())
    }

    /// Replace a session's stored metric snapshot
    ///
    /// Not gated on training state: a final metrics report may arrive
    /// after the session completed.
    pub fn update_metrics(&self, model: ModelId, metrics: TrainingMetrics) -> Result<()> {
        self.session(model)?.update_metrics(metrics);
        Ok(())
    }

    /// Copy of a session's metric history, oldest first
    pub fn history(&self, model: ModelId) -> Result<Vec<EpochMetrics>> {
        Ok(self.session(model)?.history().entries().to_vec())
    }

    fn session(&self, model: ModelId) -> Result<MutexGuard<'_, TrainingSession>> {
        let session = self
            .sessions
            .get(&model)
            .ok_or_else(|| Error::UnknownModel(model.to_string()))?;
        Ok(lock_recovered(session))
    }
}

impl Default for TrainingSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock a session, recovering from poisoning
///
/// Session mutations cannot leave the aggregate in a torn state (every
/// transition writes complete values), so a panicked holder does not
/// invalidate the data.
fn lock_recovered(session: &Mutex<TrainingSession>) -> MutexGuard<'_, TrainingSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_registry_models_have_sessions() {
        let manager = TrainingSessionManager::new();
        assert_eq!(manager.models(), ModelId::ALL.to_vec());
        for id in ModelId::ALL {
            let snap = manager.snapshot(id).unwrap();
            assert_eq!(snap.progress.state, SessionState::Idle);
            assert_eq!(snap.progress.current_epoch, 0);
        }
    }

    #[test]
    fn test_subset_manager_reports_unknown_model() {
        let manager = TrainingSessionManager::with_models(&[ModelId::Resnet50, ModelId::Vit]);
        let err = manager.snapshot(ModelId::RandomForest).unwrap_err();
        assert!(matches!(err, Error::UnknownModel(_)));

        let err = manager.start_or_pause(ModelId::RandomForest).unwrap_err();
        assert!(format!("{err}").contains("random-forest"));
    }

    #[test]
    fn test_with_config_override() {
        let manager = TrainingSessionManager::new()
            .with_config(ModelId::Resnet50, TrainConfig::new(5, 8))
            .unwrap();
        let snap = manager.snapshot(ModelId::Resnet50).unwrap();
        assert_eq!(snap.config.epochs, 5);
        assert_eq!(snap.config.batch_size, 8);

        // Other sessions keep their registry defaults
        let snap = manager.snapshot(ModelId::Vit).unwrap();
        assert_eq!(snap.config.epochs, 40);
    }

    #[test]
    fn test_with_config_validates() {
        let result =
            TrainingSessionManager::new().with_config(ModelId::Vit, TrainConfig::new(0, 16));
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_flips_only_training_state() {
        let manager = TrainingSessionManager::new();
        let state = manager.start_or_pause(ModelId::Resnet50).unwrap();
        assert_eq!(state, SessionState::Training);

        let snap = manager.snapshot(ModelId::Resnet50).unwrap();
        assert_eq!(snap.progress.current_epoch, 0);

        let state = manager.start_or_pause(ModelId::Resnet50).unwrap();
        assert_eq!(state, SessionState::Idle);
    }

    #[test]
    fn test_tick_all_skips_idle_sessions() {
        let manager = TrainingSessionManager::new();
        manager.start_or_pause(ModelId::Vit).unwrap();

        manager.tick_all();

        assert_eq!(
            manager.snapshot(ModelId::Vit).unwrap().progress.current_epoch,
            1
        );
        assert_eq!(
            manager
                .snapshot(ModelId::Resnet50)
                .unwrap()
                .progress
                .current_epoch,
            0
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let manager = TrainingSessionManager::new();
        manager.start_or_pause(ModelId::Resnet50).unwrap();
        manager.start_or_pause(ModelId::RandomForest).unwrap();

        manager.tick(ModelId::Resnet50).unwrap();
        manager.tick(ModelId::Resnet50).unwrap();
        // random-forest completes after its single epoch
        manager.tick(ModelId::RandomForest).unwrap();

        assert_eq!(
            manager
                .snapshot(ModelId::Resnet50)
                .unwrap()
                .progress
                .current_epoch,
            2
        );
        assert_eq!(
            manager
                .snapshot(ModelId::RandomForest)
                .unwrap()
                .progress
                .state,
            SessionState::Completed
        );
        assert_eq!(
            manager.snapshot(ModelId::Vit).unwrap().progress.current_epoch,
            0
        );
    }

    #[test]
    fn test_update_metrics_and_history() {
        let manager = TrainingSessionManager::new();
        manager.start_or_pause(ModelId::Vit).unwrap();
        manager.tick(ModelId::Vit).unwrap();

        let m = TrainingMetrics::new(0.9, 1.0, 0.55, 0.5);
        manager.update_metrics(ModelId::Vit, m).unwrap();

        let snap = manager.snapshot(ModelId::Vit).unwrap();
        assert_eq!(snap.metrics, m);

        let history = manager.history(ModelId::Vit).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].epoch, 1);
    }
}
