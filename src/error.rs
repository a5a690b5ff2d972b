//! Crate-level error types
//!
//! Every failure is scoped to the single offending operation: a bad
//! aggregation call leaves all sessions and prior decisions untouched,
//! and nothing here is retried internally.

use crate::registry::ModelId;
use thiserror::Error;

/// Errors reported by the session and ensemble cores
#[derive(Debug, Error)]
pub enum Error {
    /// Operation referenced a model absent from the registry/session set
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Lifecycle operation attempted on a session that already completed
    #[error("Session for {0} already completed ({1} epochs)")]
    SessionCompleted(ModelId, usize),

    /// Results and weights do not cover the same model set
    #[error("Model set mismatch: results {{{results}}} vs weights {{{weights}}}")]
    ModelSetMismatch {
        /// Comma-separated model ids present in the results map
        results: String,
        /// Comma-separated model ids present in the weights map
        weights: String,
    },

    /// Class probabilities for a model do not sum to 1
    #[error("Invalid probability distribution for {model}: sum is {sum}")]
    InvalidProbabilityDistribution {
        /// Offending model
        model: ModelId,
        /// Actual probability sum
        sum: f64,
    },

    /// Ensemble weights sum to zero or less
    #[error("Degenerate ensemble weights: sum is {0}, must be positive")]
    DegenerateWeights(f64),

    /// Hyperparameter configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Declarative spec could not be loaded or parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
