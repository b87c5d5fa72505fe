//! Single-record scoring pipeline
//!
//! Data flow per invocation: loader → validator → aligner → predictor →
//! assembler, strictly sequential and synchronous.

pub mod aligner;
pub mod record;
pub mod result;
pub mod validator;

mod engine;

pub use engine::{InferenceEngine, ScoringSession};
pub use record::{FeatureRecord, FeatureValue};
pub use result::{PredictedValue, PredictionResult};
