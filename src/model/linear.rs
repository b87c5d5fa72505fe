//! Fitted linear regression

use crate::error::{Result, ScoreError};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Fitted linear regression model.
///
/// Holds only the trained parameters; fitting happens in the external
/// training process that produced the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Fitted coefficients (weights), one per feature
    pub coefficients: Array1<f64>,
    /// Fitted intercept (bias)
    pub intercept: f64,
}

impl LinearRegression {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Number of features the model was trained with
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict continuous values for each row of `x`
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(ScoreError::Shape {
                expected: format!("{} features", self.coefficients.len()),
                actual: format!("{} features", x.ncols()),
            });
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict() {
        let model = LinearRegression::new(array![2.0, 3.0], 1.0);
        let x = array![[1.0, 1.0], [2.0, 0.5]];
        let preds = model.predict(&x).unwrap();
        assert_eq!(preds, array![6.0, 6.5]);
    }

    #[test]
    fn test_predict_shape_mismatch() {
        let model = LinearRegression::new(array![2.0, 3.0], 1.0);
        let x = array![[1.0, 1.0, 1.0]];
        assert!(matches!(
            model.predict(&x),
            Err(ScoreError::Shape { .. })
        ));
    }
}
