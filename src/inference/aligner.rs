//! Feature alignment into a single-row DataFrame

use crate::error::{Result, ScoreError};
use crate::inference::record::{FeatureRecord, FeatureValue};
use ndarray::Array2;
use polars::prelude::*;

fn value_to_column(name: &str, value: Option<&FeatureValue>) -> Column {
    let series = match value {
        // Expected column absent from the input: fill with numeric zero
        None => Series::new(name.into(), &[0.0_f64]),
        Some(FeatureValue::Float(v)) => Series::new(name.into(), &[*v]),
        Some(FeatureValue::Int(v)) => Series::new(name.into(), &[*v]),
        Some(FeatureValue::Bool(v)) => Series::new(name.into(), &[*v]),
        Some(FeatureValue::Text(s)) => Series::new(name.into(), &[s.as_str()]),
    };
    series.into()
}

/// Build the aligned single-row DataFrame for one record.
///
/// With a known expected order the output columns are exactly that ordered
/// set: absent expected columns are zero-filled, extra input columns are
/// dropped. Without one, the columns are the input's own keys in input order.
pub fn align(record: &FeatureRecord, expected: Option<&[String]>) -> Result<DataFrame> {
    let columns: Vec<Column> = match expected {
        Some(names) => names
            .iter()
            .map(|name| value_to_column(name, record.get(name)))
            .collect(),
        None => record
            .iter()
            .map(|(name, value)| value_to_column(name, Some(value)))
            .collect(),
    };

    Ok(DataFrame::new(columns)?)
}

/// Cast the aligned row to the numeric feature matrix the model consumes.
///
/// Non-strict casts: values that cannot be represented as Float64 become 0.0.
pub fn row_to_features(df: &DataFrame) -> Result<Array2<f64>> {
    let n_cols = df.width();
    let mut values = Vec::with_capacity(n_cols);

    for col in df.get_columns() {
        let col_f64 = col.cast(&DataType::Float64)?;
        let value = col_f64.f64()?.get(0).unwrap_or(0.0);
        values.push(value);
    }

    Array2::from_shape_vec((1, n_cols), values).map_err(|e| ScoreError::Data(e.to_string()))
}
