//! Linear trend regression.
//!
//! Ordinary least squares over period numbers x = 1..N, the trend model
//! behind point forecasts and lifecycle classification.

use crate::core::TrendDirection;
use crate::error::{ForecastError, Result};
use serde::Serialize;

/// A fitted linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendFit {
    /// Change in units per period.
    pub slope: f64,
    /// Fitted value at x = 0.
    pub intercept: f64,
    /// Coefficient of determination of the historical fit. 0 for fewer than
    /// two observations or zero total variance; may go negative for fits
    /// worse than the mean. Not clamped.
    pub r_squared: f64,
}

impl TrendFit {
    /// Point forecasts for the `horizon` periods after a history of
    /// `n_history` observations, i.e. x = N+1 .. N+horizon.
    ///
    /// Each prediction is floored at zero; demand forecasts are never
    /// negative.
    pub fn project(&self, n_history: usize, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|h| {
                let x = (n_history + h) as f64;
                (self.slope * x + self.intercept).max(0.0)
            })
            .collect()
    }

    /// Qualitative label derived from the slope sign.
    pub fn direction(&self) -> TrendDirection {
        if self.slope > 0.0 {
            TrendDirection::Increasing
        } else if self.slope < 0.0 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

/// Fit a least-squares line through `(1, series[0]) .. (N, series[N-1])`.
///
/// A zero denominator (degenerate x spread) yields slope 0 and intercept ȳ
/// instead of dividing by zero.
pub fn fit_trend(series: &[f64]) -> Result<TrendFit> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let n = series.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = (i + 1) as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let denom = sum_x2 - n * mean_x * mean_x;
    let slope = if denom == 0.0 {
        0.0
    } else {
        (sum_xy - n * mean_x * mean_y) / denom
    };
    let intercept = mean_y - slope * mean_x;

    let r_squared = if series.len() < 2 {
        0.0
    } else {
        let ss_tot: f64 = series.iter().map(|&y| (y - mean_y).powi(2)).sum();
        if ss_tot == 0.0 {
            0.0
        } else {
            let ss_res: f64 = series
                .iter()
                .enumerate()
                .map(|(i, &y)| {
                    let fitted = slope * (i + 1) as f64 + intercept;
                    (y - fitted).powi(2)
                })
                .sum();
            1.0 - ss_res / ss_tot
        }
    };

    Ok(TrendFit {
        slope,
        intercept,
        r_squared,
    })
}
