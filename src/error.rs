//! Error types for the tabscore scoring pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scoring operations
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Main error type for the scoring pipeline
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Model file not found: {0}")]
    ModelNotFound(PathBuf),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required features: {missing:?}")]
    MissingFeatures { missing: Vec<String> },

    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("Invalid JSON input: {0}")]
    InputParse(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("Data error: {0}")]
    Data(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Model kind {0} does not support probability estimation")]
    ProbabilitiesUnsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<polars::error::PolarsError> for ScoreError {
    fn from(err: polars::error::PolarsError) -> Self {
        ScoreError::Data(err.to_string())
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoreError::Prediction("boom".to_string());
        assert_eq!(err.to_string(), "Prediction error: boom");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScoreError = io_err.into();
        assert!(matches!(err, ScoreError::Io(_)));
    }

    #[test]
    fn test_missing_features_lists_names() {
        let err = ScoreError::MissingFeatures {
            missing: vec!["income".to_string()],
        };
        assert!(err.to_string().contains("income"));
    }
}
