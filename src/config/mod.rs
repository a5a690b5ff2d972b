//! Declarative configuration
//!
//! YAML analyze specs and their validation: load, validate, then hand
//! the inputs to the ensemble core.

mod schema;
mod validate;

pub use schema::{load_spec, AnalyzeSpec, EnsembleSpec, ProbabilitySpec};
pub use validate::{validate_spec, ValidationError};
