//! Fitted Gaussian Naive Bayes classifier

use crate::error::{Result, ScoreError};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fitted Gaussian Naive Bayes classifier for continuous features.
///
/// Per-class parameters are stored as parallel vectors indexed by class
/// position; `classes` gives the label each position maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianNaiveBayes {
    /// Class labels, sorted ascending
    pub classes: Vec<i64>,
    /// Prior probability of each class
    pub priors: Vec<f64>,
    /// Mean of each feature for each class
    pub means: Vec<Vec<f64>>,
    /// Variance of each feature for each class (smoothing already applied)
    pub variances: Vec<Vec<f64>>,
}

impl GaussianNaiveBayes {
    pub fn new(
        classes: Vec<i64>,
        priors: Vec<f64>,
        means: Vec<Vec<f64>>,
        variances: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            classes,
            priors,
            means,
            variances,
        }
    }

    /// Number of features the model was trained with
    pub fn n_features(&self) -> usize {
        self.means.first().map(|m| m.len()).unwrap_or(0)
    }

    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    fn check_shape(&self, x: &Array2<f64>) -> Result<()> {
        let n_features = self.n_features();
        if x.ncols() != n_features {
            return Err(ScoreError::Shape {
                expected: format!("{} features", n_features),
                actual: format!("{} features", x.ncols()),
            });
        }
        Ok(())
    }

    /// Predict class labels
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let log_probs = self.predict_log_proba(x)?;

        Ok(log_probs
            .rows()
            .into_iter()
            .map(|row| {
                let max_idx = row
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.classes[max_idx] as f64
            })
            .collect())
    }

    /// Predict normalized log probabilities
    pub fn predict_log_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_shape(x)?;

        let n_samples = x.nrows();
        let n_classes = self.classes.len();
        let mut log_probs = Array2::zeros((n_samples, n_classes));

        for (i, row) in x.rows().into_iter().enumerate() {
            for j in 0..n_classes {
                let log_prior = self.priors[j].ln();
                let log_likelihood: f64 = row
                    .iter()
                    .zip(self.means[j].iter())
                    .zip(self.variances[j].iter())
                    .map(|((&xi, &mean), &var)| {
                        // Log of Gaussian PDF
                        -0.5 * ((xi - mean).powi(2) / var + var.ln() + (2.0 * PI).ln())
                    })
                    .sum();
                log_probs[[i, j]] = log_prior + log_likelihood;
            }
        }

        // Normalize (log-sum-exp trick)
        for mut row in log_probs.rows_mut() {
            let max_val = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let log_sum: f64 = row.iter().map(|&v| (v - max_val).exp()).sum::<f64>().ln();
            for val in row.iter_mut() {
                *val = *val - max_val - log_sum;
            }
        }

        Ok(log_probs)
    }

    /// Predict class probabilities, one column per class in `classes` order
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let log_probs = self.predict_log_proba(x)?;
        Ok(log_probs.mapv(|v| v.exp()))
    }
}
