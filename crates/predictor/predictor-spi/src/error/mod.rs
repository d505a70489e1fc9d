//! Error types for predictor operations
//!
//! This module provides the [`PredictorError`] enum and [`Result`] type
//! alias for standardized error handling across the predictor stack.

mod predictor_error;

pub use predictor_error::{PredictorError, Result};
