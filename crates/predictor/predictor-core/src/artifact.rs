//! Model artifact loading
//!
//! The serialized artifact is a JSON envelope tagged with the model kind,
//! produced and versioned by an external training pipeline. Loading is the
//! only persistence this system does; nothing is ever written back.
//!
//! ```json
//! { "model_type": "linear_regression",
//!   "intercept": 26002.5,
//!   "coefficients": [9091.0] }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use predictor_spi::{PredictorError, Regressor, Result};
use serde::{Deserialize, Serialize};

use crate::linear::LinearModel;

/// Artifact filename both front-ends read from the working directory
pub const DEFAULT_MODEL_FILE: &str = "salary_model.json";

/// Tagged artifact envelope
///
/// The tag keeps the file self-describing, so the loader rejects artifacts
/// of a kind this build does not support instead of misreading them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression(LinearModel),
}

impl ModelArtifact {
    /// Validate and unwrap into a usable model
    pub fn into_model(self) -> Result<Box<dyn Regressor>> {
        match self {
            ModelArtifact::LinearRegression(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
        }
    }
}

/// Load a model artifact from disk
///
/// Fails with the load-class errors: [`PredictorError::ArtifactNotFound`]
/// if the path does not exist, [`PredictorError::ArtifactUnreadable`] if
/// the file cannot be read or deserialized (typically a format mismatch
/// with the training pipeline), and [`PredictorError::InvalidArtifact`] if
/// the parameters fail validation.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Box<dyn Regressor>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PredictorError::ArtifactNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| PredictorError::ArtifactUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        PredictorError::ArtifactUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    artifact.into_model()
}
