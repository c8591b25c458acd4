//! Linear trend forecast strategy

use crate::forecast::error::ForecastSkip;
use crate::forecast::moving_average::moving_average_forecast;
use tracing::debug;

/// Fit price against a zero-based time index by ordinary least squares
/// and extend the fitted line over the next `horizon` indices
pub fn try_linear_trend(
    prices: &[f64],
    min_points: usize,
    horizon: usize,
) -> Result<Vec<f64>, ForecastSkip> {
    let n = prices.len();
    if n < min_points {
        return Err(ForecastSkip::InsufficientData);
    }

    let x_mean = (n as f64 - 1.0) / 2.0;
    let y_mean = prices.iter().sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, &price) in prices.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxx += dx * dx;
        sxy += dx * (price - y_mean);
    }

    if sxx == 0.0 {
        return Err(ForecastSkip::FitFailed);
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ForecastSkip::FitFailed);
    }

    Ok((0..horizon)
        .map(|step| intercept + slope * (n + step) as f64)
        .collect())
}

/// Linear-trend forecast with its documented fallback applied
///
/// A skipped fit falls back to the moving-average forecast, which in
/// turn may hold the last price. None only for an empty series.
pub fn linear_trend_forecast(
    prices: &[f64],
    min_points: usize,
    ma_window: usize,
    horizon: usize,
) -> Option<Vec<f64>> {
    match try_linear_trend(prices, min_points, horizon) {
        Ok(forecast) => Some(forecast),
        Err(skip) => {
            debug!(strategy = "linear_trend", reason = %skip, "falling back to moving average");
            moving_average_forecast(prices, ma_window, horizon)
        }
    }
}
