//! Confidence intervals around point predictions.
//!
//! Bands are symmetric multiples of the historical population standard
//! deviation: z = 1.0 covers ~68%, 2.0 ~95%, 3.0 ~99.7% under a normal
//! error assumption.

use crate::core::ConfidenceBand;
use crate::error::{ForecastError, Result};

/// Population standard deviation (divide by N, not N - 1).
///
/// The whole engine uses population statistics; switching to the sample
/// estimator would shift every interval and anomaly threshold downstream.
/// Returns 0 for an empty slice.
pub fn population_std_dev(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Build a confidence band around `predictions` using the variability of the
/// historical series.
///
/// Lower bounds are floored at zero. An empty prediction sequence yields an
/// empty band (with the history's sigma still reported).
pub fn confidence_band(predictions: &[f64], history: &[f64], z: f64) -> Result<ConfidenceBand> {
    if history.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if !z.is_finite() || z < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "z multiplier must be non-negative and finite, got {}",
            z
        )));
    }

    let sigma = population_std_dev(history);
    let margin = z * sigma;

    Ok(ConfidenceBand {
        lower: predictions.iter().map(|p| (p - margin).max(0.0)).collect(),
        upper: predictions.iter().map(|p| p + margin).collect(),
        sigma,
    })
}
