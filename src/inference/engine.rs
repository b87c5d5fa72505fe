//! Scoring engine
//!
//! One-shot, synchronous pipeline: load → validate → align → predict →
//! assemble. The loader produces an immutable [`ScoringSession`] that is
//! threaded through every later stage; [`InferenceEngine`] is the thin
//! stateful wrapper the command surface drives.

use crate::error::{Result, ScoreError};
use crate::inference::aligner::{align, row_to_features};
use crate::inference::record::FeatureRecord;
use crate::inference::result::{PredictedValue, PredictionResult};
use crate::inference::validator::validate;
use crate::model::{ModelArtifact, TrainedModel};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// An immutable loaded-model session.
///
/// Produced once by the loader; never mutated. Safe to share read-only if
/// the pipeline is ever re-scoped into a long-lived service.
#[derive(Debug, Clone)]
pub struct ScoringSession {
    artifact: ModelArtifact,
    model_path: PathBuf,
}

impl ScoringSession {
    /// Load an artifact from disk and open a session around it.
    ///
    /// Fails with `ModelNotFound` when the path does not exist; a present
    /// but undeserializable artifact is logged and surfaced as `Load` so the
    /// caller decides whether to abort.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ScoreError::ModelNotFound(path.to_path_buf()));
        }

        let artifact = ModelArtifact::load(path).map_err(|e| {
            error!(model = %path.display(), error = %e, "failed to load model artifact");
            ScoreError::Load(e.to_string())
        })?;

        info!(
            model = %path.display(),
            kind = artifact.model.kind_name(),
            features = artifact.feature_names.as_ref().map(|f| f.len()),
            "model artifact loaded"
        );

        Ok(Self {
            artifact,
            model_path: path.to_path_buf(),
        })
    }

    /// The ordered feature names captured at load time, if the artifact
    /// carries them
    pub fn expected_features(&self) -> Option<&[String]> {
        self.artifact.feature_names.as_deref()
    }

    pub fn model(&self) -> &TrainedModel {
        &self.artifact.model
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Score one record through the full pipeline.
    pub fn score(&self, record: &FeatureRecord) -> Result<PredictionResult> {
        validate(record, self.expected_features())?;

        let row = align(record, self.expected_features())?;
        let x = row_to_features(&row)?;

        let raw = self.artifact.model.predict(&x).map_err(|e| {
            error!(
                model = %self.model_path.display(),
                kind = self.artifact.model.kind_name(),
                error = %e,
                "prediction failed"
            );
            ScoreError::Prediction(e.to_string())
        })?;

        let raw = raw
            .first()
            .copied()
            .ok_or_else(|| ScoreError::Prediction("model returned no prediction".to_string()))?;

        let (probabilities, confidence) = self.probabilities(&x);

        let prediction = PredictedValue::from_raw(
            raw,
            self.artifact.model.output_kind(),
            self.artifact.class_labels.as_deref(),
        );

        Ok(PredictionResult::assemble(
            prediction,
            confidence,
            probabilities,
            record.clone(),
            &self.model_path,
        ))
    }

    /// Optional probability step. Failure here degrades both outputs to
    /// absent instead of failing the prediction.
    fn probabilities(&self, x: &ndarray::Array2<f64>) -> (Option<Vec<f64>>, Option<f64>) {
        if !self.artifact.model.supports_probabilities() {
            return (None, None);
        }

        match self.artifact.model.predict_proba(x) {
            Ok(proba) if proba.ncols() > 0 => {
                let row: Vec<f64> = proba.row(0).to_vec();
                let confidence = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                (Some(row), Some(confidence))
            }
            Ok(_) => (None, None),
            Err(e) => {
                debug!(error = %e, "probability estimation failed, continuing without confidence");
                (None, None)
            }
        }
    }
}

/// Stateful engine over an optional session.
///
/// Mirrors the one-shot invocation shape: construct with an artifact path,
/// `load`, then `predict` exactly once. Predicting before a successful load
/// fails with `ModelNotLoaded` and has no side effect.
#[derive(Debug)]
pub struct InferenceEngine {
    model_path: PathBuf,
    session: Option<ScoringSession>,
}

impl InferenceEngine {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            session: None,
        }
    }

    /// Run the loader stage
    pub fn load(&mut self) -> Result<()> {
        let session = ScoringSession::open(&self.model_path)?;
        self.session = Some(session);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ScoringSession> {
        self.session.as_ref()
    }

    /// Score one record. Requires a prior successful `load`.
    pub fn predict(&self, record: &FeatureRecord) -> Result<PredictionResult> {
        let session = self.session.as_ref().ok_or(ScoreError::ModelNotLoaded)?;
        session.score(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GaussianNaiveBayes, LinearRegression, LogisticRegression};
    use ndarray::array;
    use tempfile::TempDir;

    fn write_artifact(artifact: &ModelArtifact) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        artifact.save(&path).unwrap();
        (dir, path)
    }

    fn record(json: &str) -> FeatureRecord {
        FeatureRecord::from_json_str(json).unwrap()
    }

    fn regression_artifact() -> ModelArtifact {
        ModelArtifact::new(TrainedModel::LinearRegression(LinearRegression::new(
            array![2.0, 0.001],
            1.0,
        )))
        .with_feature_names(vec!["age".to_string(), "income".to_string()])
    }

    fn classification_artifact() -> ModelArtifact {
        ModelArtifact::new(TrainedModel::LogisticRegression(LogisticRegression::new(
            array![1.0, -0.5],
            0.0,
        )))
        .with_feature_names(vec!["age".to_string(), "income".to_string()])
    }

    #[test]
    fn test_predict_before_load_fails() {
        let engine = InferenceEngine::new("does-not-matter.json");
        let result = engine.predict(&record(r#"{"age": 30}"#));
        assert!(matches!(result, Err(ScoreError::ModelNotLoaded)));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn test_open_missing_artifact() {
        let result = ScoringSession::open("/nonexistent/model.json");
        assert!(matches!(result, Err(ScoreError::ModelNotFound(_))));
    }

    #[test]
    fn test_open_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{broken").unwrap();

        let result = ScoringSession::open(&path);
        assert!(matches!(result, Err(ScoreError::Load(_))));
    }

    #[test]
    fn test_regression_scoring_echoes_input() {
        let (_dir, path) = write_artifact(&regression_artifact());
        let mut engine = InferenceEngine::new(&path);
        engine.load().unwrap();

        let input = record(r#"{"age": 30, "income": 50000}"#);
        let result = engine.predict(&input).unwrap();

        assert_eq!(result.input_features, input);
        assert_eq!(
            result.prediction,
            PredictedValue::Float(2.0 * 30.0 + 0.001 * 50000.0 + 1.0)
        );
        // regressor has no probability capability
        assert!(result.confidence.is_none());
        assert!(result.probabilities.is_none());
        assert_eq!(result.model_path, path.display().to_string());
    }

    #[test]
    fn test_classification_confidence_is_max_probability() {
        let (_dir, path) = write_artifact(&classification_artifact());
        let mut engine = InferenceEngine::new(&path);
        engine.load().unwrap();

        let result = engine
            .predict(&record(r#"{"age": 10, "income": 2}"#))
            .unwrap();

        let probabilities = result.probabilities.expect("classifier emits probabilities");
        let confidence = result.confidence.expect("classifier emits confidence");
        assert_eq!(probabilities.len(), 2);
        assert!((probabilities[0] + probabilities[1] - 1.0).abs() < 1e-9);

        let max = probabilities.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(confidence, max);
    }

    #[test]
    fn test_validation_failure_blocks_prediction() {
        let (_dir, path) = write_artifact(&regression_artifact());
        let mut engine = InferenceEngine::new(&path);
        engine.load().unwrap();

        let result = engine.predict(&record(r#"{"age": 30}"#));
        match result {
            Err(ScoreError::MissingFeatures { missing }) => assert_eq!(missing, ["income"]),
            other => panic!("expected MissingFeatures, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_expected_list_uses_input_order() {
        let artifact = ModelArtifact::new(TrainedModel::LinearRegression(
            LinearRegression::new(array![1.0, 1.0], 0.0),
        ));
        let (_dir, path) = write_artifact(&artifact);
        let mut engine = InferenceEngine::new(&path);
        engine.load().unwrap();

        let result = engine.predict(&record(r#"{"a": 1, "b": 2}"#)).unwrap();
        assert_eq!(result.prediction, PredictedValue::Float(3.0));
    }

    #[test]
    fn test_class_labels_map_prediction() {
        let artifact = ModelArtifact::new(TrainedModel::GaussianNaiveBayes(
            GaussianNaiveBayes::new(
                vec![0, 1],
                vec![0.5, 0.5],
                vec![vec![0.0, 0.0], vec![10.0, 10.0]],
                vec![vec![1.0, 1.0], vec![1.0, 1.0]],
            ),
        ))
        .with_feature_names(vec!["x".to_string(), "y".to_string()])
        .with_class_labels(vec!["low".to_string(), "high".to_string()]);

        let (_dir, path) = write_artifact(&artifact);
        let mut engine = InferenceEngine::new(&path);
        engine.load().unwrap();

        let result = engine.predict(&record(r#"{"x": 9.5, "y": 10.2}"#)).unwrap();
        assert_eq!(result.prediction, PredictedValue::Text("high".to_string()));
        assert!(result.probabilities.is_some());
    }

    #[test]
    fn test_extra_keys_tolerated_in_scoring() {
        let (_dir, path) = write_artifact(&classification_artifact());
        let mut engine = InferenceEngine::new(&path);
        engine.load().unwrap();

        let result = engine
            .predict(&record(r#"{"income": 1, "age": 2, "extra": 99}"#))
            .unwrap();
        assert!(matches!(result.prediction, PredictedValue::Int(_)));
    }
}
