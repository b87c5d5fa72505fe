//! Input feature records

use crate::error::{Result, ScoreError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scalar feature value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// A single input record: ordered mapping of feature name to scalar value.
///
/// Key order is insertion order and is preserved through deserialization,
/// alignment, and the echo in the prediction result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRecord(IndexMap<String, FeatureValue>);

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from a JSON object string.
    ///
    /// Nested objects or arrays are not scalar features and fail to parse.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ScoreError::InputParse(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.0.insert(name.into(), value);
    }

    /// Iterate name/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FeatureValue)> {
        self.0.iter()
    }

    /// Feature names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}
