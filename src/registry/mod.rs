//! Static model registry
//!
//! Catalog of the models participating in the detection ensemble, their
//! display metadata, and their default training hyperparameters. The
//! registry is fixed at compile time; sessions and ensemble weights are
//! keyed by [`ModelId`] everywhere else in the crate.

use crate::error::Error;
use crate::session::TrainConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the ensemble's models
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelId {
    /// CNN feature extractor
    Resnet50,
    /// Vision Transformer
    Vit,
    /// Classical ML classifier over extracted features
    RandomForest,
}

impl ModelId {
    /// All registry models, in canonical order
    pub const ALL: [ModelId; 3] = [ModelId::Resnet50, ModelId::Vit, ModelId::RandomForest];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Resnet50 => "resnet50",
            ModelId::Vit => "vit",
            ModelId::RandomForest => "random-forest",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resnet50" => Ok(ModelId::Resnet50),
            "vit" => Ok(ModelId::Vit),
            "random-forest" => Ok(ModelId::RandomForest),
            other => Err(Error::UnknownModel(other.to_string())),
        }
    }
}

/// Display metadata for a registry model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Registry identifier
    pub id: ModelId,
    /// Human-readable name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Look up display metadata for a model
pub fn model_info(id: ModelId) -> ModelInfo {
    match id {
        ModelId::Resnet50 => ModelInfo {
            id,
            name: "ResNet50",
            description: "CNN-based image feature extractor. Focus on spatial and texture patterns.",
        },
        ModelId::Vit => ModelInfo {
            id,
            name: "Vision Transformer (ViT)",
            description: "Transformer-based global image understanding. Patch-based attention visualization.",
        },
        ModelId::RandomForest => ModelInfo {
            id,
            name: "Random Forest",
            description: "Classical ML classifier. Uses extracted image features.",
        },
    }
}

/// Default training hyperparameters for a model
///
/// The random forest has no gradient-based training loop, so its learning
/// rate is zero and its optimizer label is "N/A"; a single epoch covers
/// the full tree construction.
pub fn default_config(id: ModelId) -> TrainConfig {
    match id {
        ModelId::Resnet50 => TrainConfig::new(50, 32)
            .with_learning_rate(0.001)
            .with_optimizer("Adam")
            .with_loss_function("CrossEntropyLoss")
            .with_data_augmentation(true),
        ModelId::Vit => TrainConfig::new(40, 16)
            .with_learning_rate(0.0005)
            .with_optimizer("AdamW")
            .with_loss_function("CrossEntropyLoss")
            .with_data_augmentation(true),
        ModelId::RandomForest => TrainConfig::new(1, 100)
            .with_learning_rate(0.0)
            .with_optimizer("N/A")
            .with_loss_function("Gini")
            .with_data_augmentation(false),
    }
}

/// Enumerate all registry models
pub fn list_models() -> impl Iterator<Item = ModelId> {
    ModelId::ALL.into_iter()
}
