//! Hold-out evaluation of the forecast strategies
//!
//! The most recent rows are withheld, each strategy forecasts them
//! from the remainder, and the report scores every strategy by mean
//! absolute error against the withheld prices.

use crate::common::math;
use crate::config::ForecastConfig;
use crate::forecast::exponential::exp_smoothing_forecast;
use crate::forecast::linear_trend::linear_trend_forecast;
use crate::forecast::moving_average::moving_average_forecast;
use crate::models::features::IndicatorRow;
use crate::models::insight::{PerformanceReport, StrategyKind, StrategyScore};
use tracing::debug;

/// Training rows required beyond the hold-out window.
pub const MIN_TRAIN_ROWS: usize = 10;

/// Score each strategy on a trailing hold-out split
///
/// A series shorter than `evaluation_window + MIN_TRAIN_ROWS` yields an
/// empty report; a skipped evaluation is not an error. Strategies are
/// scored individually, with their usual fallbacks, not as an ensemble.
pub fn evaluate_strategies(
    rows: &[IndicatorRow],
    evaluation_window: usize,
    config: &ForecastConfig,
) -> PerformanceReport {
    let mut report = PerformanceReport::default();
    if evaluation_window == 0 || rows.len() < evaluation_window + MIN_TRAIN_ROWS {
        debug!(
            rows = rows.len(),
            window = evaluation_window,
            "series too short for hold-out evaluation"
        );
        return report;
    }

    let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
    let (train, test) = prices.split_at(prices.len() - evaluation_window);

    let candidates = [
        (
            StrategyKind::MovingAverage,
            moving_average_forecast(train, config.ma_window, evaluation_window),
        ),
        (
            StrategyKind::LinearTrend,
            linear_trend_forecast(train, config.min_trend_points, config.ma_window, evaluation_window),
        ),
        (
            StrategyKind::ExponentialSmoothing,
            exp_smoothing_forecast(train, config.smoothing_alpha, evaluation_window),
        ),
    ];

    for (kind, forecast) in candidates {
        if let Some(mae) = forecast.as_deref().and_then(|f| math::mean_absolute_error(f, test)) {
            if mae.is_finite() {
                report.scores.insert(kind, StrategyScore { mae });
            } else {
                debug!(strategy = ?kind, "non-finite error, dropping strategy from report");
            }
        }
    }
    report
}
