//! YAML schema for declarative analysis specs
//!
//! An analyze spec carries the per-model class probabilities produced by
//! the inference engines together with the ensemble weights to combine
//! them under:
//!
//! ```yaml
//! ensemble:
//!   weights:
//!     resnet50: 0.33
//!     vit: 0.33
//!     random-forest: 0.34
//!   tie_break: human-made
//! results:
//!   resnet50:
//!     ai_generated: 0.87
//!     human_made: 0.13
//! ```

use crate::ensemble::{EnsembleAggregator, EnsembleWeights, InferenceResult, TieBreak};
use crate::error::{Error, Result};
use crate::registry::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Complete analysis specification
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeSpec {
    /// How to combine the per-model results
    pub ensemble: EnsembleSpec,
    /// Per-model class probabilities
    pub results: BTreeMap<ModelId, ProbabilitySpec>,
}

/// Ensemble combination settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSpec {
    /// Relative weight per model; normalized before use
    pub weights: BTreeMap<ModelId, f64>,
    /// Tie-break rule for exactly tied scores
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// One model's class probabilities
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitySpec {
    /// Probability the image is AI-generated
    pub ai_generated: f64,
    /// Probability the image is human-made
    pub human_made: f64,
}

impl AnalyzeSpec {
    /// Per-model inference results for the aggregator
    pub fn results(&self) -> BTreeMap<ModelId, InferenceResult> {
        self.results
            .iter()
            .map(|(&id, p)| (id, InferenceResult::new(p.ai_generated, p.human_made)))
            .collect()
    }

    /// Ensemble weights for the aggregator
    pub fn weights(&self) -> EnsembleWeights {
        self.ensemble
            .weights
            .iter()
            .map(|(&id, &w)| (id, w))
            .collect()
    }

    /// Aggregator configured per this spec
    pub fn aggregator(&self) -> EnsembleAggregator {
        EnsembleAggregator::new().with_tie_break(self.ensemble.tie_break)
    }
}

/// Load an analyze spec from a YAML file
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<AnalyzeSpec> {
    let yaml = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read spec file {}: {e}",
            path.as_ref().display()
        ))
    })?;
    serde_yaml::from_str(&yaml).map_err(|e| Error::Config(format!("Failed to parse YAML spec: {e}")))
}
