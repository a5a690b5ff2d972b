//! # discernir
//!
//! Training orchestration and soft-voting ensemble decisions for an
//! AI-generated vs human-made image detector.
//!
//! The crate governs the two pieces of real logic behind the product:
//! - **Session control** - per-model hyperparameter configuration,
//!   training/paused lifecycle, and externally ticked epoch progress
//!   ([`session::TrainingSessionManager`])
//! - **Ensemble aggregation** - pure weighted soft voting over per-model
//!   class probabilities ([`ensemble::EnsembleAggregator`])
//!
//! Model training and inference themselves happen in external engines;
//! this core orchestrates their lifecycle and combines their outputs.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use discernir::ensemble::{soft_vote, EnsembleWeights, InferenceResult, Label};
//! use discernir::registry::ModelId;
//!
//! let results = BTreeMap::from([
//!     (ModelId::Resnet50, InferenceResult::new(0.87, 0.13)),
//!     (ModelId::Vit, InferenceResult::new(0.91, 0.09)),
//!     (ModelId::RandomForest, InferenceResult::new(0.79, 0.21)),
//! ]);
//! let weights = EnsembleWeights::new()
//!     .with_weight(ModelId::Resnet50, 0.33)
//!     .with_weight(ModelId::Vit, 0.33)
//!     .with_weight(ModelId::RandomForest, 0.34);
//!
//! let decision = soft_vote(&results, &weights)?;
//! assert_eq!(decision.prediction, Label::AiGenerated);
//! assert_eq!(decision.confidence, 86);
//! # Ok::<(), discernir::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod ensemble;
pub mod error;
pub mod eval;
pub mod registry;
pub mod session;

pub use ensemble::{EnsembleAggregator, EnsembleDecision, EnsembleWeights, InferenceResult, Label};
pub use error::{Error, Result};
pub use registry::ModelId;
pub use session::{SessionState, TrainConfig, TrainingMetrics, TrainingSessionManager};
