//! Weighted soft voting
//!
//! Combines the per-model class probabilities into one decision by
//! averaging them under normalized ensemble weights. The combination is a
//! pure function: identical inputs always produce an identical decision,
//! and nothing is cached across calls.

use super::label::Label;
use super::result::InferenceResult;
use super::weights::EnsembleWeights;
use crate::error::{Error, Result};
use crate::registry::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rule for resolving an exact tie between aggregated class scores
///
/// The conservative default treats a dead heat as human-made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// A tie counts as human-made
    #[default]
    HumanMade,
    /// A tie counts as AI-generated
    AiGenerated,
}

impl TieBreak {
    /// Label awarded on an exact tie
    pub fn winner(&self) -> Label {
        match self {
            TieBreak::HumanMade => Label::HumanMade,
            TieBreak::AiGenerated => Label::AiGenerated,
        }
    }
}

/// Aggregated score per class label
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LabelScores {
    /// Soft-voted score for AI-Generated
    pub ai_generated: f64,
    /// Soft-voted score for Human-Made
    pub human_made: f64,
}

impl LabelScores {
    /// Score for a label
    pub fn score(&self, label: Label) -> f64 {
        match label {
            Label::AiGenerated => self.ai_generated,
            Label::HumanMade => self.human_made,
        }
    }
}

/// Final ensemble verdict for one analysis request
#[derive(Clone, Debug, Serialize)]
pub struct EnsembleDecision {
    /// Winning label
    pub prediction: Label,
    /// Winning label's aggregated score as a percentage in [0, 100]
    pub confidence: u8,
    /// The normalized weight vector actually applied
    pub weights: BTreeMap<ModelId, f64>,
    /// Aggregated per-label scores
    pub scores: LabelScores,
}

/// Deterministic combiner of per-model inference results
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use discernir::ensemble::{EnsembleAggregator, EnsembleWeights, InferenceResult, Label};
/// use discernir::registry::ModelId;
///
/// let results = BTreeMap::from([
///     (ModelId::Resnet50, InferenceResult::new(0.87, 0.13)),
///     (ModelId::Vit, InferenceResult::new(0.91, 0.09)),
///     (ModelId::RandomForest, InferenceResult::new(0.79, 0.21)),
/// ]);
/// let weights = EnsembleWeights::new()
///     .with_weight(ModelId::Resnet50, 0.33)
///     .with_weight(ModelId::Vit, 0.33)
///     .with_weight(ModelId::RandomForest, 0.34);
///
/// let decision = EnsembleAggregator::new().combine(&results, &weights)?;
/// assert_eq!(decision.prediction, Label::AiGenerated);
/// assert_eq!(decision.confidence, 86);
/// # Ok::<(), discernir::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EnsembleAggregator {
    tie_break: TieBreak,
}

impl EnsembleAggregator {
    /// Aggregator with the default tie-break
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Combine per-model results under the given weights
    ///
    /// Validates that results and weights cover the same model set and
    /// that every result is a probability distribution, normalizes the
    /// weights, soft-votes each label, and reports the winner with its
    /// score as a round-half-up percentage.
    pub fn combine(
        &self,
        results: &BTreeMap<ModelId, InferenceResult>,
        weights: &EnsembleWeights,
    ) -> Result<EnsembleDecision> {
        check_model_sets(results, weights)?;

        for (&model, result) in results {
            if !result.is_valid_distribution() {
                return Err(Error::InvalidProbabilityDistribution {
                    model,
                    sum: result.sum(),
                });
            }
        }

        let normalized = weights.normalized()?;

        let mut scores = LabelScores {
            ai_generated: 0.0,
            human_made: 0.0,
        };
        for (model, weight) in &normalized {
            let result = &results[model];
            scores.ai_generated += weight * result.probability(Label::AiGenerated);
            scores.human_made += weight * result.probability(Label::HumanMade);
        }

        let prediction = if scores.ai_generated > scores.human_made {
            Label::AiGenerated
        } else if scores.human_made > scores.ai_generated {
            Label::HumanMade
        } else {
            self.tie_break.winner()
        };

        let confidence = (scores.score(prediction) * 100.0).round() as u8;

        Ok(EnsembleDecision {
            prediction,
            confidence,
            weights: normalized,
            scores,
        })
    }
}

/// Combine with the default aggregator
pub fn soft_vote(
    results: &BTreeMap<ModelId, InferenceResult>,
    weights: &EnsembleWeights,
) -> Result<EnsembleDecision> {
    EnsembleAggregator::new().combine(results, weights)
}

fn check_model_sets(
    results: &BTreeMap<ModelId, InferenceResult>,
    weights: &EnsembleWeights,
) -> Result<()> {
    let result_models: Vec<ModelId> = results.keys().copied().collect();
    let weight_models: Vec<ModelId> = weights.models().collect();
    if result_models != weight_models {
        return Err(Error::ModelSetMismatch {
            results: joined(&result_models),
            weights: joined(&weight_models),
        });
    }
    Ok(())
}

fn joined(models: &[ModelId]) -> String {
    models
        .iter()
        .map(ModelId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
