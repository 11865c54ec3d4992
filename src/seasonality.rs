//! Additive seasonal decomposition.
//!
//! Splits a series into trend + seasonal + residual: a centered moving
//! average supplies the trend, detrended values grouped by position within
//! the season supply the repeating pattern, and whatever is left is residual.

use crate::error::{ForecastError, Result};
use crate::smoothing::centered_moving_average;
use serde::Serialize;

/// Result of additive decomposition, aligned by index to the input series.
///
/// Trend and residual are undefined (`None`) at the edges where the centered
/// averaging window does not fit. Wherever trend is defined,
/// `trend[i] + seasonal[i] + residual[i]` reconstructs the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decomposition {
    pub trend: Vec<Option<f64>>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<Option<f64>>,
    /// The repeating seasonal pattern, length = season length.
    pub pattern: Vec<f64>,
}

impl Decomposition {
    /// Strength of the seasonal component, in [0, 1].
    ///
    /// `1 - Var(residual) / Var(seasonal + residual)` over the indices where
    /// the residual is defined; 0 when the denominator vanishes.
    pub fn seasonal_strength(&self) -> f64 {
        let mut residuals = Vec::new();
        let mut combined = Vec::new();
        for (i, r) in self.residual.iter().enumerate() {
            if let Some(r) = r {
                residuals.push(*r);
                combined.push(self.seasonal[i] + r);
            }
        }
        if residuals.is_empty() {
            return 0.0;
        }

        let var_residual = population_variance(&residuals);
        let var_combined = population_variance(&combined);

        if var_combined < 1e-10 {
            return 0.0;
        }

        (1.0 - var_residual / var_combined).clamp(0.0, 1.0)
    }
}

fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Decompose a series into trend, seasonal, and residual components.
///
/// `season_length` is the number of periods per seasonal cycle (4 for
/// quarterly patterns, 12 for monthly-within-year). Requires at least two
/// full cycles of history.
pub fn decompose(series: &[f64], season_length: usize) -> Result<Decomposition> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if season_length < 2 {
        return Err(ForecastError::InvalidParameter(
            "season length must be at least 2".to_string(),
        ));
    }
    if series.len() < 2 * season_length {
        return Err(ForecastError::InsufficientData {
            needed: 2 * season_length,
            got: series.len(),
        });
    }

    let n = series.len();
    let trend = centered_moving_average(series, season_length);

    // Average detrended values by position within the season.
    let mut sums = vec![0.0; season_length];
    let mut counts = vec![0usize; season_length];
    for (i, t) in trend.iter().enumerate() {
        if let Some(t) = t {
            sums[i % season_length] += series[i] - t;
            counts[i % season_length] += 1;
        }
    }
    let pattern: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .map(|(&s, &c)| if c == 0 { 0.0 } else { s / c as f64 })
        .collect();

    let seasonal: Vec<f64> = (0..n).map(|i| pattern[i % season_length]).collect();

    let residual: Vec<Option<f64>> = trend
        .iter()
        .enumerate()
        .map(|(i, t)| t.map(|t| series[i] - t - seasonal[i]))
        .collect();

    Ok(Decomposition {
        trend,
        seasonal,
        residual,
        pattern,
    })
}
