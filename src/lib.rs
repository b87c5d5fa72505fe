//! tabscore - one-shot model scoring
//!
//! Loads a previously trained, serialized model artifact and produces a
//! prediction for a single input record.
//!
//! # Modules
//!
//! - [`model`] - Model artifacts: the serialized container and the fitted,
//!   predict-only model variants it can hold
//! - [`inference`] - The scoring pipeline: record, validator, aligner,
//!   engine, result
//! - [`cli`] - Command-line interface
//! - [`error`] - Crate-wide error type

pub mod error;

pub mod inference;
pub mod model;

pub mod cli;

pub use error::{Result, ScoreError};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{Result, ScoreError};

    // Artifacts
    pub use crate::model::{ArtifactMetadata, ModelArtifact, OutputKind, TrainedModel};

    // Scoring pipeline
    pub use crate::inference::{
        FeatureRecord, FeatureValue, InferenceEngine, PredictedValue, PredictionResult,
        ScoringSession,
    };
}
