//! Soft-voting ensemble aggregation
//!
//! Combines per-model classification probabilities into one final
//! decision:
//! - `Label` - the two-class label set
//! - `InferenceResult` - one model's class probabilities
//! - `EnsembleWeights` - relative trust per model, normalized before use
//! - `EnsembleAggregator` / `soft_vote` - the pure combination itself
//!
//! Aggregation shares no mutable state and is safe to call concurrently
//! with different input sets.

mod label;
mod result;
mod vote;
mod weights;


pub use label::Label;
pub use result::{InferenceResult, PROB_EPSILON};
pub use vote::{soft_vote, EnsembleAggregator, EnsembleDecision, LabelScores, TieBreak};
pub use weights::EnsembleWeights;
