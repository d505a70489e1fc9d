//! Predictor Service Provider Interface
//!
//! Defines the core contract and error types for model inference.
//!
//! This crate provides the foundational abstractions the rest of the
//! predictor stack builds on:
//!
//! - [`Regressor`]: the narrow interface a loaded model artifact exposes
//! - [`PredictorError`]: standardized error type for all predictor operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Regressor;
pub use error::{PredictorError, Result};
