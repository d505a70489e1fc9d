//! Predictor error types
//!
//! Defines the standardized error type for loading a model artifact and
//! querying it.

use thiserror::Error;

/// Result type alias for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Errors that can occur while loading or querying a model artifact
///
/// The variants fall into two classes: load-class errors (the artifact
/// could not be brought up at all) and per-request errors (one input could
/// not be answered). [`PredictorError::is_fatal`] tells them apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// Artifact file does not exist
    #[error("Model artifact not found: '{path}'")]
    ArtifactNotFound { path: String },

    /// Artifact file exists but could not be read or deserialized
    #[error("Failed to read model artifact '{path}': {reason}")]
    ArtifactUnreadable { path: String, reason: String },

    /// Artifact deserialized into unusable parameters
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// Input value is not a finite number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The underlying prediction call failed
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

impl PredictorError {
    /// Whether this error means the model could not be brought up at all
    ///
    /// A process that cannot run without a model treats fatal errors as
    /// terminal; input and prediction errors are always recoverable and the
    /// caller keeps accepting further input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PredictorError::ArtifactNotFound { .. }
                | PredictorError::ArtifactUnreadable { .. }
                | PredictorError::InvalidArtifact(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PredictorError Display Tests
    // ==========================================================================

    #[test]
    fn test_artifact_not_found_display() {
        let error = PredictorError::ArtifactNotFound {
            path: "salary_model.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Model artifact not found: 'salary_model.json'"
        );
    }

    #[test]
    fn test_artifact_unreadable_display() {
        let error = PredictorError::ArtifactUnreadable {
            path: "salary_model.json".to_string(),
            reason: "unexpected end of file".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read model artifact 'salary_model.json': unexpected end of file"
        );
    }

    #[test]
    fn test_invalid_artifact_display() {
        let error = PredictorError::InvalidArtifact("model has no coefficients".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid model artifact: model has no coefficients"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let error = PredictorError::InvalidInput("'abc' is not a number".to_string());
        assert_eq!(error.to_string(), "Invalid input: 'abc' is not a number");
    }

    #[test]
    fn test_prediction_failed_display() {
        let error = PredictorError::PredictionFailed("model returned no output".to_string());
        assert_eq!(
            error.to_string(),
            "Prediction failed: model returned no output"
        );
    }

    // ==========================================================================
    // Fatal / Recoverable Classification Tests
    // ==========================================================================

    #[test]
    fn test_load_class_errors_are_fatal() {
        assert!(PredictorError::ArtifactNotFound {
            path: "x".to_string()
        }
        .is_fatal());
        assert!(PredictorError::ArtifactUnreadable {
            path: "x".to_string(),
            reason: "y".to_string()
        }
        .is_fatal());
        assert!(PredictorError::InvalidArtifact("z".to_string()).is_fatal());
    }

    #[test]
    fn test_request_class_errors_are_recoverable() {
        assert!(!PredictorError::InvalidInput("x".to_string()).is_fatal());
        assert!(!PredictorError::PredictionFailed("y".to_string()).is_fatal());
    }

    // ==========================================================================
    // Trait Implementation Tests
    // ==========================================================================

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = PredictorError::InvalidInput("bad".to_string());
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &PredictorError::InvalidArtifact("x".to_string());
        let _ = error.to_string();
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<f64> {
            Err(PredictorError::InvalidInput("nope".to_string()))
        }

        fn outer() -> Result<f64> {
            let value = inner()?;
            Ok(value * 2.0)
        }

        assert!(outer().is_err());
    }
}
