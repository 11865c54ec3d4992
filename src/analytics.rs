//! Derived sales metrics: velocity, growth rate, and lifecycle stage.

use crate::regression::fit_trend;
use serde::Serialize;
use std::fmt;

/// Qualitative stage of a product's sales trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStage {
    /// Too little history or negligible volume to judge.
    New,
    /// Sales trending up faster than 10% of the average per period.
    Growth,
    /// Steady sales without a strong trend either way.
    Mature,
    /// Sales trending down faster than 10% of the average per period.
    Decline,
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleStage::New => write!(f, "new"),
            LifecycleStage::Growth => write!(f, "growth"),
            LifecycleStage::Mature => write!(f, "mature"),
            LifecycleStage::Decline => write!(f, "decline"),
        }
    }
}

/// Average units sold per week: `(total_units / total_days) * 7`.
///
/// Returns 0 when `total_days` is zero or negative.
pub fn sales_velocity(total_units: f64, total_days: f64) -> f64 {
    if total_days <= 0.0 {
        return 0.0;
    }
    total_units / total_days * 7.0
}

/// Percentage change from `previous` to `current`.
///
/// Returns 0 when `previous` is zero rather than dividing by zero; a product
/// going from nothing to something has no meaningful percentage base.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Classify a weekly-sales series into a lifecycle stage.
///
/// Fewer than 4 data points or an average below one unit per period reads as
/// [`LifecycleStage::New`]; otherwise the regression slope relative to the
/// average decides between growth, decline, and mature.
pub fn classify_lifecycle(weekly_sales: &[f64]) -> LifecycleStage {
    if weekly_sales.len() < 4 {
        return LifecycleStage::New;
    }

    let mean = weekly_sales.iter().sum::<f64>() / weekly_sales.len() as f64;
    if mean < 1.0 {
        return LifecycleStage::New;
    }

    let Ok(fit) = fit_trend(weekly_sales) else {
        return LifecycleStage::New;
    };

    if fit.slope > 0.1 * mean {
        LifecycleStage::Growth
    } else if fit.slope < -0.1 * mean {
        LifecycleStage::Decline
    } else {
        LifecycleStage::Mature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn velocity_converts_daily_rate_to_weekly() {
        // 70 units over 35 days = 2/day = 14/week.
        assert_relative_eq!(sales_velocity(70.0, 35.0), 14.0, epsilon = 1e-10);
    }

    #[test]
    fn velocity_is_zero_without_elapsed_days() {
        assert_eq!(sales_velocity(100.0, 0.0), 0.0);
        assert_eq!(sales_velocity(100.0, -3.0), 0.0);
    }

    #[test]
    fn growth_rate_known_values() {
        assert_relative_eq!(growth_rate(150.0, 100.0), 50.0, epsilon = 1e-10);
        assert_relative_eq!(growth_rate(50.0, 100.0), -50.0, epsilon = 1e-10);
        assert_relative_eq!(growth_rate(100.0, 100.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn growth_rate_guards_zero_baseline() {
        assert_eq!(growth_rate(42.0, 0.0), 0.0);
        assert_eq!(growth_rate(0.0, 0.0), 0.0);
    }

    #[test]
    fn short_history_is_new() {
        assert_eq!(classify_lifecycle(&[]), LifecycleStage::New);
        assert_eq!(classify_lifecycle(&[5.0, 6.0, 7.0]), LifecycleStage::New);
    }

    #[test]
    fn negligible_volume_is_new() {
        // Average below one unit per period.
        let series = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        assert_eq!(classify_lifecycle(&series), LifecycleStage::New);
    }

    #[test]
    fn rising_sales_classify_as_growth() {
        // Slope 5, mean 17.5: slope is well above 10% of the mean.
        let series = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0];
        assert_eq!(classify_lifecycle(&series), LifecycleStage::Growth);
    }

    #[test]
    fn falling_sales_classify_as_decline() {
        let series = [30.0, 25.0, 20.0, 15.0, 10.0, 5.0];
        assert_eq!(classify_lifecycle(&series), LifecycleStage::Decline);
    }

    #[test]
    fn steady_sales_classify_as_mature() {
        let series = [20.0, 21.0, 19.0, 20.0, 20.5, 19.5];
        assert_eq!(classify_lifecycle(&series), LifecycleStage::Mature);
    }

    #[test]
    fn lifecycle_stage_display() {
        assert_eq!(LifecycleStage::New.to_string(), "new");
        assert_eq!(LifecycleStage::Growth.to_string(), "growth");
        assert_eq!(LifecycleStage::Mature.to_string(), "mature");
        assert_eq!(LifecycleStage::Decline.to_string(), "decline");
    }
}
