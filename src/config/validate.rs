//! Analyze spec validation
//!
//! Range and coverage checks before a spec reaches the aggregator, which
//! re-enforces the cross-set invariants itself. All findings are
//! collected so a report can show every problem at once.

use super::schema::AnalyzeSpec;
use crate::ensemble::PROB_EPSILON;
use crate::registry::ModelId;
use thiserror::Error;

/// Validation findings for an analyze spec
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("No results: at least one model is required")]
    EmptyResults,

    #[error("Invalid probability for {0}: {1} (must be in [0.0, 1.0])")]
    InvalidProbability(ModelId, f64),

    #[error("Probabilities for {0} sum to {1} (must sum to 1.0)")]
    UnnormalizedDistribution(ModelId, f64),

    #[error("Negative weight for {0}: {1}")]
    NegativeWeight(ModelId, f64),

    #[error("Weights sum to {0} (must be positive)")]
    NonPositiveWeightSum(f64),

    #[error("Weight listed for {0} but no result provided")]
    MissingResult(ModelId),

    #[error("Result listed for {0} but no weight provided")]
    MissingWeight(ModelId),
}

/// Check an analyze spec, collecting every finding
pub fn validate_spec(spec: &AnalyzeSpec) -> std::result::Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if spec.results.is_empty() {
        errors.push(ValidationError::EmptyResults);
    }

    for (&model, probs) in &spec.results {
        let mut in_range = true;
        for p in [probs.ai_generated, probs.human_made] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                errors.push(ValidationError::InvalidProbability(model, p));
                in_range = false;
            }
        }
        let sum = probs.ai_generated + probs.human_made;
        if in_range && (sum - 1.0).abs() > PROB_EPSILON {
            errors.push(ValidationError::UnnormalizedDistribution(model, sum));
        }
        if !spec.ensemble.weights.contains_key(&model) {
            errors.push(ValidationError::MissingWeight(model));
        }
    }

    let mut weight_sum = 0.0;
    for (&model, &weight) in &spec.ensemble.weights {
        if weight < 0.0 {
            errors.push(ValidationError::NegativeWeight(model, weight));
        }
        weight_sum += weight;
        if !spec.results.contains_key(&model) {
            errors.push(ValidationError::MissingResult(model));
        }
    }
    if !spec.ensemble.weights.is_empty() && weight_sum <= 0.0 {
        errors.push(ValidationError::NonPositiveWeightSum(weight_sum));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{EnsembleSpec, ProbabilitySpec};
    use std::collections::BTreeMap;

    fn valid_spec() -> AnalyzeSpec {
        AnalyzeSpec {
            ensemble: EnsembleSpec {
                weights: BTreeMap::from([(ModelId::Resnet50, 0.6), (ModelId::Vit, 0.4)]),
                tie_break: Default::default(),
            },
            results: BTreeMap::from([
                (
                    ModelId::Resnet50,
                    ProbabilitySpec {
                        ai_generated: 0.87,
                        human_made: 0.13,
                    },
                ),
                (
                    ModelId::Vit,
                    ProbabilitySpec {
                        ai_generated: 0.91,
                        human_made: 0.09,
                    },
                ),
            ]),
        }
    }

    #[test]
    fn test_valid_spec_passes() {
        assert!(validate_spec(&valid_spec()).is_ok());
    }

    #[test]
    fn test_empty_results_flagged() {
        let mut spec = valid_spec();
        spec.results.clear();
        let errors = validate_spec(&spec).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyResults));
    }

    #[test]
    fn test_out_of_range_probability_flagged() {
        let mut spec = valid_spec();
        spec.results.insert(
            ModelId::Vit,
            ProbabilitySpec {
                ai_generated: 1.3,
                human_made: -0.3,
            },
        );
        let errors = validate_spec(&spec).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| matches!(e, ValidationError::InvalidProbability(ModelId::Vit, _)))
                .count(),
            2
        );
    }

    #[test]
    fn test_unnormalized_distribution_flagged() {
        let mut spec = valid_spec();
        spec.results.insert(
            ModelId::Vit,
            ProbabilitySpec {
                ai_generated: 0.6,
                human_made: 0.6,
            },
        );
        let errors = validate_spec(&spec).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnnormalizedDistribution(ModelId::Vit, _))));
    }

    #[test]
    fn test_coverage_mismatch_flagged() {
        let mut spec = valid_spec();
        spec.results.remove(&ModelId::Vit);
        spec.ensemble.weights.insert(ModelId::RandomForest, 0.2);

        let errors = validate_spec(&spec).unwrap_err();
        assert!(errors.contains(&ValidationError::MissingResult(ModelId::Vit)));
        assert!(errors.contains(&ValidationError::MissingResult(ModelId::RandomForest)));
    }

    #[test]
    fn test_weight_problems_flagged() {
        let mut spec = valid_spec();
        spec.ensemble.weights.insert(ModelId::Resnet50, -0.6);
        spec.ensemble.weights.insert(ModelId::Vit, 0.0);

        let errors = validate_spec(&spec).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::NegativeWeight(ModelId::Resnet50, _))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::NonPositiveWeightSum(_))));
    }
}
