//! # demand-forecast
//!
//! Statistical forecasting engine for supplier sales analytics.
//!
//! Provides moving-average smoothing, linear trend regression, additive
//! seasonal decomposition, confidence intervals, z-score anomaly detection,
//! derived sales metrics, and a composite forecast report combining them.
//!
//! Every function is a pure transformation from input slices and scalars to
//! output records: no I/O, no shared state, no internal caching. Calls are
//! independent and safe to issue concurrently from multiple request handlers.
//!
//! ## Quick example
//!
//! ```
//! use demand_forecast::prelude::*;
//!
//! let weekly_sales = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0];
//! let report = generate_forecast(&weekly_sales, 4);
//!
//! assert_eq!(report.predictions.len(), 4);
//! assert_eq!(report.quality.trend, TrendDirection::Increasing);
//! ```

pub mod analytics;
pub mod core;
pub mod detection;
pub mod error;
pub mod forecast;
pub mod intervals;
pub mod metrics;
pub mod regression;
pub mod seasonality;
pub mod smoothing;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::analytics::{classify_lifecycle, growth_rate, sales_velocity, LifecycleStage};
    pub use crate::core::{
        Anomaly, ConfidenceBand, ForecastMethod, ForecastQuality, ForecastReport, Severity,
        TrendDirection, WeeklySeries,
    };
    pub use crate::detection::{detect_anomalies, DEFAULT_ANOMALY_THRESHOLD};
    pub use crate::error::{ForecastError, Result};
    pub use crate::forecast::{generate_default_forecast, generate_forecast, DEFAULT_FORECAST_PERIODS};
    pub use crate::intervals::{confidence_band, population_std_dev};
    pub use crate::metrics::mape;
    pub use crate::regression::{fit_trend, TrendFit};
    pub use crate::seasonality::{decompose, Decomposition};
    pub use crate::smoothing::{centered_moving_average, ema, sma, wma};
}
