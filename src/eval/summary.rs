//! Per-model evaluation records and the system-level summary

use super::classification::ConfusionCounts;
use crate::ensemble::{InferenceResult, Label};
use crate::registry::ModelId;
use serde::Serialize;

/// Evaluation record for one model
///
/// Offline metrics plus the model's hard decision for the current
/// analysis request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ModelEvaluation {
    /// Which model was evaluated
    pub model: ModelId,
    /// Accuracy on the evaluation set, in [0, 1]
    pub accuracy: f64,
    /// Precision on the evaluation set, in [0, 1]
    pub precision: f64,
    /// Recall on the evaluation set, in [0, 1]
    pub recall: f64,
    /// F1 score on the evaluation set, in [0, 1]
    pub f1_score: f64,
    /// The model's argmax label for the analyzed image
    pub prediction: Label,
    /// Winning class probability as a rounded percentage
    pub confidence: u8,
}

impl ModelEvaluation {
    /// Build a record from confusion counts and an inference result
    pub fn from_counts(model: ModelId, counts: ConfusionCounts, result: &InferenceResult) -> Self {
        let (prediction, confidence) = result.prediction();
        Self {
            model,
            accuracy: counts.accuracy(),
            precision: counts.precision(),
            recall: counts.recall(),
            f1_score: counts.f1_score(),
            prediction,
            confidence,
        }
    }
}

/// System-level metrics across all model evaluations
///
/// Plain arithmetic means; an empty input yields zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EvaluationSummary {
    /// Mean accuracy across models, in [0, 1]
    pub overall_accuracy: f64,
    /// Mean F1 score across models, in [0, 1]
    pub overall_f1: f64,
}

impl EvaluationSummary {
    /// Summarize a set of model evaluations
    pub fn from_evaluations(evaluations: &[ModelEvaluation]) -> Self {
        if evaluations.is_empty() {
            return Self::default();
        }
        let n = evaluations.len() as f64;
        Self {
            overall_accuracy: evaluations.iter().map(|e| e.accuracy).sum::<f64>() / n,
            overall_f1: evaluations.iter().map(|e| e.f1_score).sum::<f64>() / n,
        }
    }
}
