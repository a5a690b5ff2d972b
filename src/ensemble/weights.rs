//! Ensemble weight vectors

use crate::error::{Error, Result};
use crate::registry::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relative trust assigned to each model's output
///
/// Weights need not sum to 1 as input; they are normalized before use.
/// Negative weights and all-zero vectors are rejected at normalization.
/// Keys are ordered so aggregation sums in a deterministic order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnsembleWeights(BTreeMap<ModelId, f64>);

impl EnsembleWeights {
    /// Create an empty weight vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing map
    pub fn from_map(weights: BTreeMap<ModelId, f64>) -> Self {
        Self(weights)
    }

    /// Equal weight for every given model
    pub fn uniform(models: &[ModelId]) -> Self {
        Self(models.iter().map(|&id| (id, 1.0)).collect())
    }

    /// Set one model's weight
    pub fn with_weight(mut self, model: ModelId, weight: f64) -> Self {
        self.0.insert(model, weight);
        self
    }

    /// Models covered by this vector, in canonical order
    pub fn models(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.0.keys().copied()
    }

    /// Raw weight for a model, if present
    pub fn get(&self, model: ModelId) -> Option<f64> {
        self.0.get(&model).copied()
    }

    /// Number of weighted models
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized copy summing to 1
    ///
    /// Fails with `DegenerateWeights` when the sum is not positive or any
    /// weight is negative.
    pub fn normalized(&self) -> Result<BTreeMap<ModelId, f64>> {
        let sum: f64 = self.0.values().sum();
        if !sum.is_finite() || sum <= 0.0 || self.0.values().any(|&w| w < 0.0) {
            return Err(Error::DegenerateWeights(sum));
        }
        Ok(self.0.iter().map(|(&id, &w)| (id, w / sum)).collect())
    }
}

impl FromIterator<(ModelId, f64)> for EnsembleWeights {
    fn from_iter<I: IntoIterator<Item = (ModelId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let weights = EnsembleWeights::new()
            .with_weight(ModelId::Resnet50, 2.0)
            .with_weight(ModelId::Vit, 1.0)
            .with_weight(ModelId::RandomForest, 1.0);

        let normalized = weights.normalized().unwrap();
        assert!((normalized[&ModelId::Resnet50] - 0.5).abs() < 1e-12);
        assert!((normalized[&ModelId::Vit] - 0.25).abs() < 1e-12);

        let total: f64 = normalized.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform() {
        let weights = EnsembleWeights::uniform(&ModelId::ALL);
        let normalized = weights.normalized().unwrap();
        for value in normalized.values() {
            assert!((value - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_all_zero_rejected() {
        let weights = EnsembleWeights::new()
            .with_weight(ModelId::Resnet50, 0.0)
            .with_weight(ModelId::Vit, 0.0);
        let err = weights.normalized().unwrap_err();
        assert!(matches!(err, Error::DegenerateWeights(s) if s == 0.0));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = EnsembleWeights::new()
            .with_weight(ModelId::Resnet50, 2.0)
            .with_weight(ModelId::Vit, -0.5);
        assert!(weights.normalized().is_err());
    }

    #[test]
    fn test_already_normalized_unchanged() {
        let weights = EnsembleWeights::new()
            .with_weight(ModelId::Resnet50, 0.33)
            .with_weight(ModelId::Vit, 0.33)
            .with_weight(ModelId::RandomForest, 0.34);
        let normalized = weights.normalized().unwrap();
        assert!((normalized[&ModelId::RandomForest] - 0.34).abs() < 1e-12);
    }
}
