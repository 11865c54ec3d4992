//! Z-score anomaly detection over historical series.

use crate::core::{Anomaly, Severity};
use crate::error::{ForecastError, Result};
use crate::intervals::population_std_dev;

/// Default z-score threshold for flagging anomalies (~95% of normal data
/// falls within 2 standard deviations).
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 2.0;

/// Flag observations whose z-score exceeds `threshold`.
///
/// Mean and standard deviation are population statistics over the full
/// series. Severity is [`Severity::High`] beyond 3 standard deviations,
/// [`Severity::Medium`] otherwise. A constant series (sigma = 0) has no
/// anomalies by definition. Results are in original index order.
pub fn detect_anomalies(series: &[f64], threshold: f64) -> Result<Vec<Anomaly>> {
    if series.len() < 3 {
        return Err(ForecastError::InsufficientData {
            needed: 3,
            got: series.len(),
        });
    }
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "threshold must be positive and finite, got {}",
            threshold
        )));
    }

    let mean = series.iter().sum::<f64>() / series.len() as f64;
    let sigma = population_std_dev(series);
    if sigma == 0.0 {
        return Ok(Vec::new());
    }

    Ok(series
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| {
            let z_score = (value - mean).abs() / sigma;
            if z_score > threshold {
                Some(Anomaly {
                    index,
                    value,
                    z_score,
                    severity: if z_score > 3.0 {
                        Severity::High
                    } else {
                        Severity::Medium
                    },
                })
            } else {
                None
            }
        })
        .collect())
}
