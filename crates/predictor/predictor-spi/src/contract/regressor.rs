//! Regressor trait for loaded model artifacts
//!
//! Defines the narrow interface the rest of the system sees: a loaded
//! artifact is a value that maps rows of feature values to one output per
//! row. How the artifact was trained or serialized is not its concern.

use crate::error::Result;

/// Common trait for loaded regression models
///
/// A regressor is immutable once constructed: `predict` takes `&self` and
/// must not retain per-call state, so a single instance can serve any
/// number of independent requests.
///
/// # Example
///
/// ```rust,ignore
/// use predictor_spi::Regressor;
///
/// fn score_batch<R: Regressor>(model: &R, rows: &[Vec<f64>]) -> predictor_spi::Result<Vec<f64>> {
///     model.predict(rows)
/// }
/// ```
pub trait Regressor: Send + Sync {
    /// Predict one output per input row
    ///
    /// # Arguments
    ///
    /// * `rows` - Feature rows; every row must carry [`n_features`](Self::n_features) values
    ///
    /// # Returns
    ///
    /// One prediction per row, or an error if any row does not match the
    /// shape the model expects
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Number of feature values each row must carry
    fn n_features(&self) -> usize;
}

impl std::fmt::Debug for dyn Regressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regressor")
            .field("n_features", &self.n_features())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorError;

    // ==========================================================================
    // Mock Implementations for Testing Trait Definitions
    // ==========================================================================

    /// A regressor that returns a constant for every row
    struct MockConstantRegressor {
        output: f64,
        width: usize,
    }

    impl Regressor for MockConstantRegressor {
        fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
            for (i, row) in rows.iter().enumerate() {
                if row.len() != self.width {
                    return Err(PredictorError::PredictionFailed(format!(
                        "row {} has {} features, expected {}",
                        i,
                        row.len(),
                        self.width
                    )));
                }
            }
            Ok(vec![self.output; rows.len()])
        }

        fn n_features(&self) -> usize {
            self.width
        }
    }

    /// A regressor that fails on every call (for error-path testing)
    struct MockFailingRegressor;

    impl Regressor for MockFailingRegressor {
        fn predict(&self, _rows: &[Vec<f64>]) -> Result<Vec<f64>> {
            Err(PredictorError::PredictionFailed(
                "backend unavailable".to_string(),
            ))
        }

        fn n_features(&self) -> usize {
            1
        }
    }

    // ==========================================================================
    // Regressor Trait Tests
    // ==========================================================================

    #[test]
    fn test_predict_one_output_per_row() {
        let model = MockConstantRegressor {
            output: 7.5,
            width: 1,
        };

        let outputs = model.predict(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap();

        assert_eq!(outputs.len(), 3);
        assert!(outputs.iter().all(|&y| (y - 7.5).abs() < 1e-12));
    }

    #[test]
    fn test_predict_empty_batch() {
        let model = MockConstantRegressor {
            output: 1.0,
            width: 1,
        };

        let outputs = model.predict(&[]).unwrap();

        assert!(outputs.is_empty());
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let model = MockConstantRegressor {
            output: 0.0,
            width: 2,
        };

        let result = model.predict(&[vec![1.0]]);

        assert!(matches!(
            result.unwrap_err(),
            PredictorError::PredictionFailed(_)
        ));
    }

    #[test]
    fn test_predict_failure_propagates() {
        let model = MockFailingRegressor;

        let result = model.predict(&[vec![1.0]]);

        assert!(result.is_err());
    }

    // ==========================================================================
    // Trait Object Tests (Dynamic Dispatch)
    // ==========================================================================

    #[test]
    fn test_regressor_as_trait_object() {
        let model: Box<dyn Regressor> = Box::new(MockConstantRegressor {
            output: 3.0,
            width: 1,
        });

        let outputs = model.predict(&[vec![9.0]]).unwrap();

        assert_eq!(outputs, vec![3.0]);
        assert_eq!(model.n_features(), 1);
    }

    #[test]
    fn test_generic_scoring_function() {
        fn score<R: Regressor>(model: &R, x: f64) -> Result<f64> {
            let outputs = model.predict(&[vec![x]])?;
            Ok(outputs[0])
        }

        let model = MockConstantRegressor {
            output: 42.0,
            width: 1,
        };

        assert!((score(&model, 1.0).unwrap() - 42.0).abs() < 1e-12);
    }
}
