//! Fitted binary logistic regression

use crate::error::{Result, ScoreError};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Fitted logistic regression classifier (binary, classes 0 and 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Fitted coefficients (weights), one per feature
    pub coefficients: Array1<f64>,
    /// Fitted intercept (bias)
    pub intercept: f64,
}

fn sigmoid(z: &Array1<f64>) -> Array1<f64> {
    z.mapv(|v| 1.0 / (1.0 + (-v).exp()))
}

impl LogisticRegression {
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

    /// Positive-class probability for each row of `x`
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(ScoreError::Shape {
                expected: format!("{} features", self.coefficients.len()),
                actual: format!("{} features", x.ncols()),
            });
        }

        let linear = x.dot(&self.coefficients) + self.intercept;
        Ok(sigmoid(&linear))
    }

    /// Predict 0/1 class labels at the 0.5 threshold
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let proba = self.predict_proba(x)?;
        Ok(proba.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict_proba_bounds() {
        let model = LogisticRegression::new(array![1.0, -1.0], 0.0);
        let x = array![[5.0, 0.0], [-5.0, 0.0], [0.0, 0.0]];
        let proba = model.predict_proba(&x).unwrap();

        assert!(proba[0] > 0.99);
        assert!(proba[1] < 0.01);
        assert!((proba[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_predict_thresholds_at_half() {
        let model = LogisticRegression::new(array![1.0], 0.0);
        let x = array![[2.0], [-2.0]];
        let preds = model.predict(&x).unwrap();
        assert_eq!(preds, array![1.0, 0.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = LogisticRegression::new(array![1.0], 0.0);
        let x = array![[1.0, 2.0]];
        assert!(model.predict_proba(&x).is_err());
    }
}
