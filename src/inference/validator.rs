//! Input record validation

use crate::error::{Result, ScoreError};
use crate::inference::record::FeatureRecord;
use tracing::warn;

/// Check a record against the model's expected feature set.
///
/// An empty record always fails. When an expected feature list is known,
/// every expected feature must be present; extra keys are tolerated. The
/// missing set is reported in expected order.
pub fn validate(record: &FeatureRecord, expected: Option<&[String]>) -> Result<()> {
    if record.is_empty() {
        return Err(ScoreError::InvalidInput("empty feature record".to_string()));
    }

    if let Some(names) = expected {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| record.get(name).is_none())
            .cloned()
            .collect();

        if !missing.is_empty() {
            warn!(?missing, "input record is missing required features");
            return Err(ScoreError::MissingFeatures { missing });
        }
    }

    Ok(())
}
