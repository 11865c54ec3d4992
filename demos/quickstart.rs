//! Quickstart walkthrough of the forecasting engine.
//!
//! Run with: cargo run --example quickstart

use demand_forecast::prelude::*;

fn main() {
    println!("=== demand-forecast quickstart ===\n");

    // 1. Two years of weekly sales: trend + quarterly seasonality.
    let history: Vec<f64> = (0..104)
        .map(|i| {
            30.0 + 0.25 * i as f64
                + 6.0 * (2.0 * std::f64::consts::PI * i as f64 / 13.0).sin()
        })
        .collect();
    println!("History: {} weeks", history.len());

    // 2. Smooth the last quarter for display.
    let smoothed = sma(&history, 4).unwrap();
    println!(
        "Last smoothed value: {:.2} (raw {:.2})",
        smoothed[smoothed.len() - 1],
        history[history.len() - 1]
    );

    // 3. Composite forecast report.
    let report = generate_forecast(&history, DEFAULT_FORECAST_PERIODS);
    println!("\n--- Forecast ({} weeks ahead) ---", report.horizon());
    for (i, p) in report.predictions.iter().enumerate() {
        println!(
            "  week +{}: {:>6.2}  [{:.2}, {:.2}] at 95%",
            i + 1,
            p,
            report.band_2sigma.lower[i],
            report.band_2sigma.upper[i]
        );
    }
    println!(
        "Trend: {} (slope {:.3}/week, R² {:.3})",
        report.quality.trend, report.quality.slope, report.quality.r_squared
    );
    for a in &report.anomalies {
        println!("Anomaly at week {}: {:.1} ({})", a.index, a.value, a.severity);
    }

    // 4. Seasonal decomposition.
    let parts = decompose(&history, 13).unwrap();
    println!(
        "\nSeasonal strength over a 13-week cycle: {:.2}",
        parts.seasonal_strength()
    );

    // 5. Derived metrics.
    println!(
        "\nLifecycle: {}",
        classify_lifecycle(&history)
    );
    println!(
        "Growth vs. a year ago: {:.1}%",
        growth_rate(history[103], history[51])
    );
}
