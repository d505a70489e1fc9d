//! Prediction engine
//!
//! The load-once, predict-on-demand surface both front-ends consume. The
//! engine owns one loaded model behind the [`Regressor`] contract and maps
//! a single scalar to a single prediction.

use std::path::Path;

use predictor_core::{load_model, DEFAULT_MODEL_FILE};
use predictor_spi::{PredictorError, Regressor, Result};

/// A loaded model ready to answer single-value predictions
///
/// # Example
///
/// ```rust
/// use predictor_api::PredictionEngine;
/// use predictor_core::LinearModel;
///
/// let engine = PredictionEngine::from_model(Box::new(LinearModel::new(26002.5, vec![9091.0])));
/// let salary = engine.predict_one(5.5).unwrap();
/// assert!((salary - 76003.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct PredictionEngine {
    model: Box<dyn Regressor>,
}

impl PredictionEngine {
    /// Load the artifact at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            model: load_model(path)?,
        })
    }

    /// Load the artifact from [`DEFAULT_MODEL_FILE`] in the working directory
    pub fn from_default_file() -> Result<Self> {
        Self::from_file(DEFAULT_MODEL_FILE)
    }

    /// Wrap a model constructed elsewhere
    pub fn from_model(model: Box<dyn Regressor>) -> Self {
        Self { model }
    }

    /// Predict the output for one feature value
    ///
    /// The scalar is shaped into a single-row, single-feature batch before
    /// the model sees it; the model is never invoked with malformed data.
    pub fn predict_one(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(PredictorError::InvalidInput(format!(
                "feature value must be finite, got {}",
                value
            )));
        }

        let outputs = self.model.predict(&[vec![value]])?;
        outputs.first().copied().ok_or_else(|| {
            PredictorError::PredictionFailed("model returned no output".to_string())
        })
    }

    /// Row width the loaded model expects
    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }
}

/// Parse user-supplied text into a feature value
///
/// Rejects anything that is not a finite real number. `"NaN"` and `"inf"`
/// parse as `f64` but are not acceptable features, so finiteness is checked
/// explicitly.
pub fn parse_feature(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PredictorError::InvalidInput(format!("'{}' is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(PredictorError::InvalidInput(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }
    Ok(value)
}
