//! Weekly sales series construction and validation.
//!
//! The numerical engine operates on plain `&[f64]` slices; `WeeklySeries` is
//! the validated carrier the surrounding application builds those slices
//! with. It buckets dated sale rows into contiguous weekly totals so the
//! uniform-period-spacing invariant every algorithm relies on is constructed
//! rather than assumed.

use crate::analytics::{classify_lifecycle, sales_velocity, LifecycleStage};
use crate::error::{ForecastError, Result};
use crate::forecast::{generate_forecast, ForecastReport};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An ordered sequence of weekly sales totals, oldest first.
///
/// Observations are non-negative finite reals; index position is the only
/// temporal reference once constructed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeeklySeries {
    values: Vec<f64>,
}

impl WeeklySeries {
    /// Build a series from pre-aggregated weekly totals.
    ///
    /// Rejects negative, NaN, or infinite observations. An empty vector is a
    /// valid (empty) series.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "observation at index {} is not finite",
                    i
                )));
            }
            if v < 0.0 {
                return Err(ForecastError::InvalidParameter(format!(
                    "observation at index {} is negative",
                    i
                )));
            }
        }
        Ok(Self { values })
    }

    /// Bucket dated sale rows into contiguous weekly totals.
    ///
    /// Weeks run from the earliest observation's date; weeks with no sales
    /// between the first and last observation are zero-filled so the series
    /// has no gaps. Rows need not be sorted.
    pub fn from_observations(observations: &[(DateTime<Utc>, f64)]) -> Result<Self> {
        if observations.is_empty() {
            return Ok(Self::default());
        }

        for (i, (_, qty)) in observations.iter().enumerate() {
            if !qty.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "quantity at row {} is not finite",
                    i
                )));
            }
            if *qty < 0.0 {
                return Err(ForecastError::InvalidParameter(format!(
                    "quantity at row {} is negative",
                    i
                )));
            }
        }

        let mut start = observations[0].0;
        let mut end = observations[0].0;
        for (t, _) in observations {
            if *t < start {
                start = *t;
            }
            if *t > end {
                end = *t;
            }
        }

        let weeks = ((end - start).num_days() / 7 + 1) as usize;
        let mut totals = vec![0.0; weeks];
        for (t, qty) in observations {
            let week = ((*t - start).num_days() / 7) as usize;
            totals[week] += qty;
        }

        Ok(Self { values: totals })
    }

    /// Weekly totals, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of weekly periods.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total units sold across all weeks.
    pub fn total_units(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Number of days the series spans (7 per period).
    pub fn span_days(&self) -> f64 {
        7.0 * self.values.len() as f64
    }

    /// Units sold per week, averaged over the full span.
    pub fn velocity(&self) -> f64 {
        sales_velocity(self.total_units(), self.span_days())
    }

    /// Lifecycle stage of the product this series tracks.
    pub fn lifecycle(&self) -> LifecycleStage {
        classify_lifecycle(&self.values)
    }

    /// Composite forecast over this series.
    pub fn forecast(&self, periods: usize) -> ForecastReport {
        generate_forecast(&self.values, periods)
    }
}
