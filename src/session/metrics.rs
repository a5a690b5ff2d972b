//! Training metrics storage
//!
//! The core stores and exposes metric snapshots supplied by the external
//! training engine; it never computes them.

use serde::{Deserialize, Serialize};

/// Latest metric snapshot for one model's training run
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// Loss on the training split (>= 0.0, unbounded above)
    pub training_loss: f32,
    /// Loss on the validation split (>= 0.0, unbounded above)
    pub validation_loss: f32,
    /// Accuracy on the training split, in [0, 1]
    pub training_accuracy: f32,
    /// Accuracy on the validation split, in [0, 1]
    pub validation_accuracy: f32,
}

impl TrainingMetrics {
    /// Create a metric snapshot
    pub fn new(
        training_loss: f32,
        validation_loss: f32,
        training_accuracy: f32,
        validation_accuracy: f32,
    ) -> Self {
        Self {
            training_loss,
            validation_loss,
            training_accuracy,
            validation_accuracy,
        }
    }

    /// Whether all fields are within their documented ranges
    pub fn is_valid(&self) -> bool {
        self.training_loss.is_finite()
            && self.training_loss >= 0.0
            && self.validation_loss.is_finite()
            && self.validation_loss >= 0.0
            && (0.0..=1.0).contains(&self.training_accuracy)
            && (0.0..=1.0).contains(&self.validation_accuracy)
    }
}

/// One recorded metric snapshot, tagged with the epoch it arrived at
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// Epoch counter at the time the snapshot was stored
    pub epoch: usize,
    /// The snapshot itself
    pub metrics: TrainingMetrics,
}

/// Per-session history of metric snapshots
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetricsHistory {
    entries: Vec<EpochMetrics>,
}

impl MetricsHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot at the given epoch
    pub fn record(&mut self, epoch: usize, metrics: TrainingMetrics) {
        self.entries.push(EpochMetrics { epoch, metrics });
    }

    /// All recorded snapshots, oldest first
    pub fn entries(&self) -> &[EpochMetrics] {
        &self.entries
    }

    /// Most recently recorded snapshot
    pub fn latest(&self) -> Option<&EpochMetrics> {
        self.entries.last()
    }

    /// Lowest validation loss seen so far
    pub fn best_validation_loss(&self) -> Option<f32> {
        self.entries
            .iter()
            .map(|e| e.metrics.validation_loss)
            .fold(None, |best, v| match best {
                Some(b) if b <= v => Some(b),
                _ => Some(v),
            })
    }

    /// Number of recorded snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no snapshot has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
