//! Flat moving-average forecast strategy

use crate::common::math;
use crate::forecast::error::ForecastSkip;
use tracing::debug;

/// Forecast every future day as the mean of the last `window` prices
pub fn try_moving_average(
    prices: &[f64],
    window: usize,
    horizon: usize,
) -> Result<Vec<f64>, ForecastSkip> {
    if prices.len() < window {
        return Err(ForecastSkip::InsufficientData);
    }

    let level = math::mean(&prices[prices.len() - window..])
        .ok_or(ForecastSkip::InsufficientData)?;
    Ok(vec![level; horizon])
}

/// Moving-average forecast with its documented fallback applied
///
/// A skipped strategy holds the last price flat instead. None only for
/// an empty series.
pub fn moving_average_forecast(prices: &[f64], window: usize, horizon: usize) -> Option<Vec<f64>> {
    match try_moving_average(prices, window, horizon) {
        Ok(forecast) => Some(forecast),
        Err(skip) => {
            let last = prices.last().copied()?;
            debug!(strategy = "moving_average", reason = %skip, "holding last price");
            Some(vec![last; horizon])
        }
    }
}
