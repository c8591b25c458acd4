//! Weighted blend of the forecast strategies
//!
//! Each strategy resolves its own fallback first, so the blend always
//! covers the full horizon regardless of how short the series is.

use crate::config::ForecastConfig;
use crate::forecast::exponential::exp_smoothing_forecast;
use crate::forecast::linear_trend::linear_trend_forecast;
use crate::forecast::moving_average::moving_average_forecast;
use crate::models::insight::ForecastBundle;

/// Blend the three strategy forecasts with the configured weights
///
/// None only for an empty series.
pub fn ensemble_forecast(
    prices: &[f64],
    horizon: usize,
    config: &ForecastConfig,
) -> Option<ForecastBundle> {
    let sma_forecast = moving_average_forecast(prices, config.ma_window, horizon)?;
    let linear_forecast =
        linear_trend_forecast(prices, config.min_trend_points, config.ma_window, horizon)?;
    let exp_forecast = exp_smoothing_forecast(prices, config.smoothing_alpha, horizon)?;

    let weights = &config.weights;
    let forecasts = (0..horizon)
        .map(|day| {
            weights.moving_average_weight * sma_forecast[day]
                + weights.linear_trend_weight * linear_forecast[day]
                + weights.exp_smoothing_weight * exp_forecast[day]
        })
        .collect();

    Some(ForecastBundle {
        forecasts,
        sma_forecast,
        linear_forecast,
        exp_forecast,
    })
}
