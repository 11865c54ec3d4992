//! Forecast output records.
//!
//! Every type here is a plain value produced once per engine call and then
//! serialized into an API response; nothing is retained between calls.

use serde::Serialize;
use std::fmt;

/// Method used to produce a forecast report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// Degenerate report produced for an empty history.
    None,
    /// Ordinary least squares trend projection.
    LinearRegression,
}

/// Qualitative trend label derived from the sign of the regression slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Symmetric uncertainty band around a sequence of point predictions.
///
/// Invariants: `lower[i] <= prediction[i] <= upper[i]` for the z-multiplier
/// the band was built with, and `lower[i] >= 0` always (no negative demand).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBand {
    /// Lower bounds, floored at zero.
    pub lower: Vec<f64>,
    /// Upper bounds.
    pub upper: Vec<f64>,
    /// Population standard deviation of the history the band was derived from.
    pub sigma: f64,
}

impl ConfidenceBand {
    /// Band with no entries (empty prediction sequence).
    pub fn empty() -> Self {
        Self {
            lower: Vec::new(),
            upper: Vec::new(),
            sigma: 0.0,
        }
    }

    /// Number of bounded predictions.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// Severity of a detected anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Beyond the caller's threshold but within 3 standard deviations.
    Medium,
    /// More than 3 standard deviations from the mean.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A single observation flagged as anomalous in a historical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    /// Index into the source series.
    pub index: usize,
    /// Observed value at that index.
    pub value: f64,
    /// Magnitude of the deviation in standard deviations.
    pub z_score: f64,
    pub severity: Severity,
}

/// Goodness-of-fit block of a forecast report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastQuality {
    /// Coefficient of determination of the historical fit. Not clamped;
    /// negative values indicate a fit worse than the mean.
    pub r_squared: f64,
    /// Fitted slope, in units per period.
    pub slope: f64,
    pub trend: TrendDirection,
}

/// Composite forecast produced by [`crate::forecast::generate_forecast`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub method: ForecastMethod,
    /// Point predictions, one per future period after the last historical
    /// index. Floored at zero.
    pub predictions: Vec<f64>,
    /// 1-sigma (~68%) band around the predictions.
    pub band_1sigma: ConfidenceBand,
    /// 2-sigma (~95%) band around the predictions.
    pub band_2sigma: ConfidenceBand,
    pub quality: ForecastQuality,
    /// Anomalies detected in the historical series, in index order.
    pub anomalies: Vec<Anomaly>,
    /// Population standard deviation used for interval construction.
    pub sigma: f64,
}

impl ForecastReport {
    /// Degenerate report for an empty history: all sequences empty, method
    /// [`ForecastMethod::None`].
    pub fn none() -> Self {
        Self {
            method: ForecastMethod::None,
            predictions: Vec::new(),
            band_1sigma: ConfidenceBand::empty(),
            band_2sigma: ConfidenceBand::empty(),
            quality: ForecastQuality {
                r_squared: 0.0,
                slope: 0.0,
                trend: TrendDirection::Stable,
            },
            anomalies: Vec::new(),
            sigma: 0.0,
        }
    }

    /// Number of forecast periods.
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }

    /// True when the report was produced without any history.
    pub fn is_degenerate(&self) -> bool {
        self.method == ForecastMethod::None
    }
}
