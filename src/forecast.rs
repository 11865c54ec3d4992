//! Composite forecast generation.
//!
//! Combines trend regression, confidence intervals, and anomaly detection
//! into the single report the dashboard and order pages render.

use crate::core::{ConfidenceBand, ForecastMethod, ForecastQuality};
use crate::detection::{detect_anomalies, DEFAULT_ANOMALY_THRESHOLD};
use crate::intervals::confidence_band;
use crate::regression::fit_trend;

pub use crate::core::ForecastReport;

/// Default number of future periods to forecast.
pub const DEFAULT_FORECAST_PERIODS: usize = 8;

/// Produce a composite forecast report for a historical series.
///
/// Total function: an empty history yields a degenerate report with
/// [`ForecastMethod::None`] and all-empty sequences instead of an error,
/// because the consuming pages must render with partial or missing history.
///
/// For non-empty input the report carries regression projections (floored at
/// zero), 1-sigma and 2-sigma confidence bands, a goodness-of-fit block, and
/// the anomalies found in the *historical* series at the default threshold.
/// Histories shorter than three points skip the anomaly scan.
pub fn generate_forecast(series: &[f64], periods: usize) -> ForecastReport {
    let Ok(fit) = fit_trend(series) else {
        return ForecastReport::none();
    };

    let predictions = fit.project(series.len(), periods);

    let band_1sigma = confidence_band(&predictions, series, 1.0)
        .unwrap_or_else(|_| ConfidenceBand::empty());
    let band_2sigma = confidence_band(&predictions, series, 2.0)
        .unwrap_or_else(|_| ConfidenceBand::empty());
    let sigma = band_1sigma.sigma;

    let anomalies = if series.len() >= 3 {
        detect_anomalies(series, DEFAULT_ANOMALY_THRESHOLD).unwrap_or_default()
    } else {
        Vec::new()
    };

    ForecastReport {
        method: ForecastMethod::LinearRegression,
        predictions,
        band_1sigma,
        band_2sigma,
        quality: ForecastQuality {
            r_squared: fit.r_squared,
            slope: fit.slope,
            trend: fit.direction(),
        },
        anomalies,
        sigma,
    }
}

/// [`generate_forecast`] with the default horizon.
pub fn generate_default_forecast(series: &[f64]) -> ForecastReport {
    generate_forecast(series, DEFAULT_FORECAST_PERIODS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrendDirection;
    use approx::assert_relative_eq;

    #[test]
    fn empty_history_degrades_gracefully() {
        let report = generate_forecast(&[], 8);

        assert!(report.is_degenerate());
        assert_eq!(report.method, ForecastMethod::None);
        assert_eq!(report.horizon(), 0);
    }

    #[test]
    fn linear_history_extends_the_trend() {
        let series = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0];
        let report = generate_forecast(&series, 4);

        assert_eq!(report.method, ForecastMethod::LinearRegression);
        assert_eq!(report.horizon(), 4);
        assert_relative_eq!(report.predictions[0], 26.0, epsilon = 1e-9);
        assert_relative_eq!(report.predictions[1], 28.0, epsilon = 1e-9);
        assert_relative_eq!(report.predictions[2], 30.0, epsilon = 1e-9);
        assert_relative_eq!(report.predictions[3], 32.0, epsilon = 1e-9);
        assert_relative_eq!(report.quality.r_squared, 1.0, epsilon = 1e-9);
        assert_eq!(report.quality.trend, TrendDirection::Increasing);
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn bands_strictly_contain_predictions() {
        let series = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0];
        let report = generate_forecast(&series, 4);

        assert!(report.sigma > 0.0);
        for (i, p) in report.predictions.iter().enumerate() {
            assert!(report.band_1sigma.lower[i] < *p);
            assert!(*p < report.band_1sigma.upper[i]);
            assert!(report.band_2sigma.lower[i] < *p);
            assert!(*p < report.band_2sigma.upper[i]);
            // The 2-sigma band encloses the 1-sigma band.
            assert!(report.band_2sigma.lower[i] <= report.band_1sigma.lower[i]);
            assert!(report.band_2sigma.upper[i] >= report.band_1sigma.upper[i]);
        }
    }

    #[test]
    fn historical_outlier_appears_in_report() {
        let series = [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 60.0, 10.0, 10.0];
        let report = generate_forecast(&series, 2);

        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].index, 7);
    }

    #[test]
    fn short_history_skips_anomaly_scan() {
        let report = generate_forecast(&[5.0, 9.0], 3);

        assert_eq!(report.method, ForecastMethod::LinearRegression);
        assert_eq!(report.horizon(), 3);
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn declining_history_never_forecasts_negative_demand() {
        let series = [25.0, 20.0, 15.0, 10.0, 5.0];
        let report = generate_forecast(&series, 6);

        assert_eq!(report.quality.trend, TrendDirection::Decreasing);
        for p in &report.predictions {
            assert!(*p >= 0.0);
        }
        for l in &report.band_2sigma.lower {
            assert!(*l >= 0.0);
        }
    }

    #[test]
    fn zero_periods_gives_empty_predictions_but_full_quality() {
        let series = [2.0, 4.0, 6.0, 8.0];
        let report = generate_forecast(&series, 0);

        assert_eq!(report.horizon(), 0);
        assert!(report.band_1sigma.is_empty());
        assert_relative_eq!(report.quality.slope, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn default_horizon_is_eight() {
        let series = [3.0, 5.0, 7.0, 9.0, 11.0];
        let report = generate_default_forecast(&series);
        assert_eq!(report.horizon(), DEFAULT_FORECAST_PERIODS);
        assert_eq!(report.horizon(), 8);
    }

    #[test]
    fn constant_history_is_stable() {
        let series = [7.0, 7.0, 7.0, 7.0, 7.0];
        let report = generate_forecast(&series, 3);

        assert_eq!(report.quality.trend, TrendDirection::Stable);
        assert_relative_eq!(report.sigma, 0.0, epsilon = 1e-12);
        for p in &report.predictions {
            assert_relative_eq!(*p, 7.0, epsilon = 1e-9);
        }
        assert!(report.anomalies.is_empty());
    }
}
