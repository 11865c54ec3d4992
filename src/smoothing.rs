//! Moving-average smoothing functions.
//!
//! Building blocks for noise reduction: simple, exponential, and weighted
//! moving averages, plus the centered moving average used by seasonal
//! decomposition.

use crate::error::{ForecastError, Result};

fn validate_window(series: &[f64], window: usize) -> Result<()> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "window must be positive".to_string(),
        ));
    }
    if window > series.len() {
        return Err(ForecastError::InsufficientData {
            needed: window,
            got: series.len(),
        });
    }
    Ok(())
}

/// Simple moving average over a sliding window.
///
/// Returns `N - window + 1` values; `output[i]` is the arithmetic mean of
/// `series[i..i + window]`.
pub fn sma(series: &[f64], window: usize) -> Result<Vec<f64>> {
    validate_window(series, window)?;

    Ok(series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect())
}

/// Exponential moving average with smoothing factor `alpha` in (0, 1].
///
/// `output[0] = series[0]`; each later value is
/// `alpha * x + (1 - alpha) * previous`. `alpha = 1` reproduces the input.
pub fn ema(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "alpha must be in (0, 1], got {}",
            alpha
        )));
    }

    let mut result = Vec::with_capacity(series.len());
    let mut smoothed = series[0];
    result.push(smoothed);

    for &x in series.iter().skip(1) {
        smoothed = alpha * x + (1.0 - alpha) * smoothed;
        result.push(smoothed);
    }

    Ok(result)
}

/// Weighted moving average with linearly decaying weights.
///
/// Within each window the most recent value carries weight `window` and the
/// oldest carries weight 1; the divisor is `window * (window + 1) / 2`.
/// Returns `N - window + 1` values.
pub fn wma(series: &[f64], window: usize) -> Result<Vec<f64>> {
    validate_window(series, window)?;

    let denom = (window * (window + 1) / 2) as f64;

    Ok(series
        .windows(window)
        .map(|w| {
            let weighted: f64 = w
                .iter()
                .enumerate()
                .map(|(j, &x)| x * (j + 1) as f64)
                .sum();
            weighted / denom
        })
        .collect())
}

/// Centered moving average, same length as the input.
///
/// `output[i]` averages the `window` values starting at `i - window / 2`;
/// positions where that window does not fit inside the series are `None`.
pub fn centered_moving_average(series: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = series.len();
    if n == 0 || window == 0 {
        return vec![None; n];
    }

    let half = window / 2;
    (0..n)
        .map(|i| {
            if i < half || i + window - half > n {
                return None;
            }
            let start = i - half;
            Some(series[start..start + window].iter().sum::<f64>() / window as f64)
        })
        .collect()
}
