//! Unit tests for the moving-average strategy

use coinsight::forecast::moving_average::{moving_average_forecast, try_moving_average};
use coinsight::forecast::ForecastSkip;

#[test]
fn test_moving_average_repeats_window_mean() {
    let prices = vec![1.0, 2.0, 3.0, 10.0, 20.0, 30.0];
    let forecast = try_moving_average(&prices, 3, 4).unwrap();
    assert_eq!(forecast, vec![20.0, 20.0, 20.0, 20.0]);
}

#[test]
fn test_moving_average_short_history_is_skipped() {
    let prices = vec![100.0, 101.0];
    let result = try_moving_average(&prices, 7, 3);
    assert_eq!(result, Err(ForecastSkip::InsufficientData));
}

#[test]
fn test_moving_average_fallback_holds_last_price() {
    let prices = vec![100.0, 105.0];
    let forecast = moving_average_forecast(&prices, 7, 3).unwrap();
    assert_eq!(forecast, vec![105.0, 105.0, 105.0]);
}

#[test]
fn test_moving_average_empty_series() {
    assert!(moving_average_forecast(&[], 7, 3).is_none());
}

#[test]
fn test_moving_average_zero_horizon() {
    let prices = vec![1.0; 10];
    let forecast = moving_average_forecast(&prices, 7, 0).unwrap();
    assert!(forecast.is_empty());
}
