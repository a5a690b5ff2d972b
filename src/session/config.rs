//! Training configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-model training hyperparameters
///
/// `learning_rate` may be zero for models without a gradient loop (the
/// random forest), in which case `optimizer` is the "N/A" label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Total planned epochs (>= 1)
    pub epochs: usize,
    /// Samples per batch (>= 1)
    pub batch_size: usize,
    /// Step size for gradient-based optimizers (>= 0.0)
    pub learning_rate: f32,
    /// Optimizer label, e.g. "Adam" or "N/A"
    pub optimizer: String,
    /// Loss function label, e.g. "CrossEntropyLoss"
    pub loss_function: String,
    /// Whether the input pipeline applies augmentation
    pub data_augmentation: bool,
}

impl TrainConfig {
    /// Create a config with the given epoch and batch counts
    pub fn new(epochs: usize, batch_size: usize) -> Self {
        Self {
            epochs,
            batch_size,
            learning_rate: 0.001,
            optimizer: "Adam".to_string(),
            loss_function: "CrossEntropyLoss".to_string(),
            data_augmentation: false,
        }
    }

    /// Set the learning rate
    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Set the optimizer label
    pub fn with_optimizer(mut self, optimizer: &str) -> Self {
        self.optimizer = optimizer.to_string();
        self
    }

    /// Set the loss function label
    pub fn with_loss_function(mut self, loss_function: &str) -> Self {
        self.loss_function = loss_function.to_string();
        self
    }

    /// Enable or disable data augmentation
    pub fn with_data_augmentation(mut self, enabled: bool) -> Self {
        self.data_augmentation = enabled;
        self
    }

    /// Check hyperparameter invariants
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig(format!(
                "epochs is {} (must be >= 1)",
                self.epochs
            )));
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig(format!(
                "batch size is {} (must be >= 1)",
                self.batch_size
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning rate is {} (must be finite and >= 0.0)",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self::new(10, 32)
    }
}
