//! Linear regression model
//!
//! The inference-only counterpart of an externally trained ordinary least
//! squares model: `y = intercept + sum(coefficient_i * x_i)`. Training
//! happens in an external pipeline; this type only evaluates.

use predictor_spi::{PredictorError, Regressor, Result};
use serde::{Deserialize, Serialize};

/// Linear regression model parameters
///
/// # Example
///
/// ```rust
/// use predictor_core::LinearModel;
/// use predictor_spi::Regressor;
///
/// let model = LinearModel::new(26002.5, vec![9091.0]);
/// let outputs = model.predict(&[vec![5.5]]).unwrap();
/// assert!((outputs[0] - 76003.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Y-intercept
    intercept: f64,
    /// One weight per feature
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Create a model from externally trained parameters
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the per-feature weights
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Check that the parameters describe a usable model
    ///
    /// A usable model has at least one coefficient and only finite
    /// parameters. Deserialization alone cannot guarantee either.
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(PredictorError::InvalidArtifact(
                "model has no coefficients".to_string(),
            ));
        }
        if !self.intercept.is_finite() {
            return Err(PredictorError::InvalidArtifact(
                "intercept is not finite".to_string(),
            ));
        }
        if let Some(i) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(PredictorError::InvalidArtifact(format!(
                "coefficient {} is not finite",
                i
            )));
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        let mut outputs = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != self.coefficients.len() {
                return Err(PredictorError::PredictionFailed(format!(
                    "row {} has {} features, model expects {}",
                    i,
                    row.len(),
                    self.coefficients.len()
                )));
            }
            let weighted: f64 = row
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, c)| x * c)
                .sum();
            outputs.push(self.intercept + weighted);
        }
        Ok(outputs)
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}
