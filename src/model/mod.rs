//! Trained model artifacts
//!
//! The artifact side of the pipeline: a serde-serialized container holding one
//! fitted model plus the feature names it was trained with. Models here are
//! predict-only; fitting happens in the external training process that
//! produced the artifact.

mod artifact;
pub mod linear;
pub mod logistic;
pub mod naive_bayes;

pub use artifact::{ArtifactMetadata, ModelArtifact};
pub use linear::LinearRegression;
pub use logistic::LogisticRegression;
pub use naive_bayes::GaussianNaiveBayes;

use crate::error::{Result, ScoreError};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// What kind of scalar the model's primary prediction produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    /// Integer class labels (classification)
    ClassLabel,
    /// Continuous values (regression)
    Continuous,
}

/// Enum holding the fitted model variants an artifact can carry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrainedModel {
    LinearRegression(LinearRegression),
    LogisticRegression(LogisticRegression),
    GaussianNaiveBayes(GaussianNaiveBayes),
}

impl TrainedModel {
    /// Short name of the model kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            TrainedModel::LinearRegression(_) => "linear_regression",
            TrainedModel::LogisticRegression(_) => "logistic_regression",
            TrainedModel::GaussianNaiveBayes(_) => "gaussian_naive_bayes",
        }
    }

    /// Number of features the model was trained with
    pub fn n_features(&self) -> usize {
        match self {
            TrainedModel::LinearRegression(m) => m.n_features(),
            TrainedModel::LogisticRegression(m) => m.n_features(),
            TrainedModel::GaussianNaiveBayes(m) => m.n_features(),
        }
    }

    /// What kind of scalar `predict` produces
    pub fn output_kind(&self) -> OutputKind {
        match self {
            TrainedModel::LinearRegression(_) => OutputKind::Continuous,
            TrainedModel::LogisticRegression(_) | TrainedModel::GaussianNaiveBayes(_) => {
                OutputKind::ClassLabel
            }
        }
    }

    /// Whether the variant implements probability estimation.
    ///
    /// Resolved once from the variant, so callers never probe `predict_proba`
    /// to discover the capability.
    pub fn supports_probabilities(&self) -> bool {
        match self {
            TrainedModel::LinearRegression(_) => false,
            TrainedModel::LogisticRegression(_) | TrainedModel::GaussianNaiveBayes(_) => true,
        }
    }

    /// Primary prediction capability: one value per row of `x`
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        match self {
            TrainedModel::LinearRegression(m) => m.predict(x),
            TrainedModel::LogisticRegression(m) => m.predict(x),
            TrainedModel::GaussianNaiveBayes(m) => m.predict(x),
        }
    }

    /// Probability estimation capability: one probability row per input row,
    /// one column per class.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        match self {
            TrainedModel::LinearRegression(_) => {
                Err(ScoreError::ProbabilitiesUnsupported(self.kind_name()))
            }
            TrainedModel::LogisticRegression(m) => {
                // Binary positive-class probability, expanded to [1-p, p]
                let p = m.predict_proba(x)?;
                let n = p.len();
                let mut out = Array2::zeros((n, 2));
                for (i, &pi) in p.iter().enumerate() {
                    out[[i, 0]] = 1.0 - pi;
                    out[[i, 1]] = pi;
                }
                Ok(out)
            }
            TrainedModel::GaussianNaiveBayes(m) => m.predict_proba(x),
        }
    }
}
