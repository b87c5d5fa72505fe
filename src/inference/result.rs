//! Prediction result assembly

use crate::inference::record::FeatureRecord;
use crate::model::OutputKind;
use serde::Serialize;
use std::path::Path;

/// The model's output, normalized to a plain scalar.
///
/// Class-label outputs become `Int`, or `Text` when the artifact carries
/// named class labels; continuous outputs stay `Float`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictedValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl PredictedValue {
    /// Normalize the raw model output into a plain scalar
    pub fn from_raw(raw: f64, kind: OutputKind, class_labels: Option<&[String]>) -> Self {
        match kind {
            OutputKind::Continuous => PredictedValue::Float(raw),
            OutputKind::ClassLabel => {
                let class = raw.round() as i64;
                if let Some(label) = usize::try_from(class)
                    .ok()
                    .and_then(|idx| class_labels?.get(idx))
                {
                    return PredictedValue::Text(label.clone());
                }
                PredictedValue::Int(class)
            }
        }
    }
}

/// The final output of one scoring invocation
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub prediction: PredictedValue,
    pub confidence: Option<f64>,
    pub probabilities: Option<Vec<f64>>,
    pub input_features: FeatureRecord,
    pub model_path: String,
}

impl PredictionResult {
    /// Pure packaging; no failure modes of its own
    pub fn assemble(
        prediction: PredictedValue,
        confidence: Option<f64>,
        probabilities: Option<Vec<f64>>,
        input_features: FeatureRecord,
        model_path: &Path,
    ) -> Self {
        Self {
            prediction,
            confidence,
            probabilities,
            input_features,
            model_path: model_path.display().to_string(),
        }
    }
}
