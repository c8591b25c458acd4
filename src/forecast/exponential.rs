//! Exponential smoothing forecast strategy

use crate::forecast::error::ForecastSkip;
use tracing::debug;

/// Forecast every future day as the final single-exponential level
///
/// smoothed[0] = prices[0]
/// smoothed[i] = alpha * prices[i] + (1 - alpha) * smoothed[i-1]
///
/// The projection is flat: the last smoothed term is not re-smoothed
/// per forecast step.
pub fn try_exp_smoothing(
    prices: &[f64],
    alpha: f64,
    horizon: usize,
) -> Result<Vec<f64>, ForecastSkip> {
    if prices.len() < 2 {
        return Err(ForecastSkip::InsufficientData);
    }

    let mut level = prices[0];
    for &price in &prices[1..] {
        level = alpha * price + (1.0 - alpha) * level;
    }
    Ok(vec![level; horizon])
}

/// Exponential-smoothing forecast with its documented fallback applied
///
/// A skipped strategy holds the last price flat instead. None only for
/// an empty series.
pub fn exp_smoothing_forecast(prices: &[f64], alpha: f64, horizon: usize) -> Option<Vec<f64>> {
    match try_exp_smoothing(prices, alpha, horizon) {
        Ok(forecast) => Some(forecast),
        Err(skip) => {
            let last = prices.last().copied()?;
            debug!(strategy = "exponential_smoothing", reason = %skip, "holding last price");
            Some(vec![last; horizon])
        }
    }
}
