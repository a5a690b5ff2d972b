//! Per-model inference results

use super::label::Label;
use serde::{Deserialize, Serialize};

/// Tolerance for probability distributions summing to 1
pub const PROB_EPSILON: f64 = 1e-6;

/// One model's class probabilities for a single analysis request
///
/// Produced by the external inference engine; immutable once created.
/// Validity (both probabilities in [0, 1], summing to 1 within
/// [`PROB_EPSILON`]) is enforced at aggregation time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    ai_generated: f64,
    human_made: f64,
}

impl InferenceResult {
    /// Create a result from the two class probabilities
    pub fn new(ai_generated: f64, human_made: f64) -> Self {
        Self {
            ai_generated,
            human_made,
        }
    }

    /// Probability assigned to a label
    pub fn probability(&self, label: Label) -> f64 {
        match label {
            Label::AiGenerated => self.ai_generated,
            Label::HumanMade => self.human_made,
        }
    }

    /// Sum of both class probabilities
    pub fn sum(&self) -> f64 {
        self.ai_generated + self.human_made
    }

    /// Whether this is a probability distribution within tolerance
    pub fn is_valid_distribution(&self) -> bool {
        let in_range = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);
        in_range(self.ai_generated)
            && in_range(self.human_made)
            && (self.sum() - 1.0).abs() <= PROB_EPSILON
    }

    /// The model's own hard decision: argmax label and integer confidence
    ///
    /// Confidence is the winning probability as a rounded percentage. An
    /// exact tie falls to Human-Made, matching the ensemble default.
    pub fn prediction(&self) -> (Label, u8) {
        let label = if self.ai_generated > self.human_made {
            Label::AiGenerated
        } else {
            Label::HumanMade
        };
        let confidence = (self.probability(label) * 100.0).round() as u8;
        (label, confidence)
    }
}
