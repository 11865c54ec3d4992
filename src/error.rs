//! Error types for the demand-forecast library.

use thiserror::Error;

/// Result type alias for forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations.
///
/// Insufficient history and out-of-range parameters are reported as typed
/// errors rather than silently-empty outputs, so callers can distinguish
/// "no signal" from "zero signal" when rendering charts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input series is empty.
    #[error("empty input data")]
    EmptyData,

    /// Not enough observations for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two sequences that must align have different lengths.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
