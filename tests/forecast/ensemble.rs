//! Unit tests for the ensemble forecast

use coinsight::config::ForecastConfig;
use coinsight::forecast::ensemble_forecast;

#[test]
fn test_ensemble_bundle_lengths_match_horizon() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let bundle = ensemble_forecast(&prices, 5, &ForecastConfig::default()).unwrap();
    assert_eq!(bundle.forecasts.len(), 5);
    assert_eq!(bundle.sma_forecast.len(), 5);
    assert_eq!(bundle.linear_forecast.len(), 5);
    assert_eq!(bundle.exp_forecast.len(), 5);
}

#[test]
fn test_ensemble_is_weighted_sum_of_strategies() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.7).sin() * 8.0).collect();
    let config = ForecastConfig::default();
    let bundle = ensemble_forecast(&prices, 7, &config).unwrap();

    for day in 0..7 {
        let expected = config.weights.moving_average_weight * bundle.sma_forecast[day]
            + config.weights.linear_trend_weight * bundle.linear_forecast[day]
            + config.weights.exp_smoothing_weight * bundle.exp_forecast[day];
        assert_eq!(bundle.forecasts[day], expected);
    }
}

#[test]
fn test_ensemble_constant_series_forecasts_constant() {
    let prices = vec![100.0; 40];
    let bundle = ensemble_forecast(&prices, 7, &ForecastConfig::default()).unwrap();
    for value in bundle.forecasts {
        assert!((value - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_ensemble_single_point_holds_last_price() {
    let bundle = ensemble_forecast(&[42.0], 3, &ForecastConfig::default()).unwrap();
    assert_eq!(bundle.sma_forecast, vec![42.0, 42.0, 42.0]);
    assert_eq!(bundle.linear_forecast, vec![42.0, 42.0, 42.0]);
    assert_eq!(bundle.exp_forecast, vec![42.0, 42.0, 42.0]);
    for value in bundle.forecasts {
        assert!((value - 42.0).abs() < 1e-9);
    }
}

#[test]
fn test_ensemble_empty_series() {
    assert!(ensemble_forecast(&[], 7, &ForecastConfig::default()).is_none());
}
