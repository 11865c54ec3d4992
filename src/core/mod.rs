//! Core data structures: the weekly sales series and the forecast output
//! records consumed by dashboard and report layers.

pub mod report;
pub mod series;

pub use report::{
    Anomaly, ConfidenceBand, ForecastMethod, ForecastQuality, ForecastReport, Severity,
    TrendDirection,
};
pub use series::WeeklySeries;
