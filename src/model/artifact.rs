//! Serialized model artifact container

use crate::error::Result;
use crate::model::TrainedModel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Self-description the training process writes next to the model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Model kind name, e.g. "logistic_regression"
    pub model_kind: Option<String>,
    /// Number of features the model was trained with
    pub n_features: Option<usize>,
    /// Free-form description from the trainer
    pub description: Option<String>,
}

/// A trained model artifact as written by the external training process.
///
/// The container is serde-JSON on disk. `feature_names` and `class_labels`
/// are optional: a model trained without named columns carries neither, and
/// the pipeline falls back to the input record's own key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// The fitted model
    pub model: TrainedModel,
    /// Ordered feature names the model was trained with, if known
    pub feature_names: Option<Vec<String>>,
    /// Ordered class labels for classifiers whose classes carry names;
    /// probability vector order corresponds to this list
    pub class_labels: Option<Vec<String>>,
    /// Trainer-side metadata
    #[serde(default)]
    pub metadata: ArtifactMetadata,
}

impl ModelArtifact {
    /// Create an artifact around a fitted model
    pub fn new(model: TrainedModel) -> Self {
        let metadata = ArtifactMetadata {
            model_kind: Some(model.kind_name().to_string()),
            n_features: Some(model.n_features()),
            description: None,
        };
        Self {
            model,
            feature_names: None,
            class_labels: None,
            metadata,
        }
    }

    /// Set the ordered feature names
    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    /// Set the ordered class labels
    pub fn with_class_labels(mut self, labels: Vec<String>) -> Self {
        self.class_labels = Some(labels);
        self
    }

    /// Save the artifact to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load an artifact from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&json)?;
        Ok(artifact)
    }
}
