//! Unit tests for the technical summary

use chrono::{Duration, NaiveDate};
use coinsight::config::{IndicatorConfig, SummaryConfig};
use coinsight::indicators::build_indicator_rows;
use coinsight::insights::technical_summary;
use coinsight::models::features::IndicatorRow;
use coinsight::models::insight::{RsiSignal, TrendDirection};
use coinsight::models::price::PricePoint;

fn rows_from(prices: &[f64]) -> Vec<IndicatorRow> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let series: Vec<PricePoint> = prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(start + Duration::days(i as i64), price))
        .collect();
    build_indicator_rows(&series, &IndicatorConfig::default())
}

#[test]
fn test_summary_constant_series_is_sideways_and_neutral() {
    let rows = rows_from(&vec![100.0; 40]);
    let summary = technical_summary(&rows, &SummaryConfig::default()).unwrap();
    assert_eq!(summary.trend_direction, TrendDirection::Sideways);
    assert_eq!(summary.rsi, 50.0);
    assert_eq!(summary.rsi_signal, RsiSignal::Neutral);
    assert_eq!(summary.price_change_30d, 0.0);
    assert_eq!(summary.support_level, 100.0);
    assert_eq!(summary.resistance_level, 100.0);
}

#[test]
fn test_summary_rising_series_is_bullish_overbought() {
    let rows = rows_from(&(0..35).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
    let summary = technical_summary(&rows, &SummaryConfig::default()).unwrap();
    assert_eq!(summary.trend_direction, TrendDirection::Bullish);
    assert_eq!(summary.rsi, 100.0);
    assert_eq!(summary.rsi_signal, RsiSignal::Overbought);
    assert_eq!(summary.support_level, 105.0);
    assert_eq!(summary.resistance_level, 134.0);
    let expected_change = (134.0 - 105.0) / 105.0 * 100.0;
    assert!((summary.price_change_30d - expected_change).abs() < 1e-9);
}

#[test]
fn test_summary_falling_series_is_bearish_oversold() {
    let rows = rows_from(&(0..35).map(|i| 500.0 - i as f64).collect::<Vec<_>>());
    let summary = technical_summary(&rows, &SummaryConfig::default()).unwrap();
    assert_eq!(summary.trend_direction, TrendDirection::Bearish);
    assert_eq!(summary.rsi, 0.0);
    assert_eq!(summary.rsi_signal, RsiSignal::Oversold);
}

#[test]
fn test_summary_short_series_defaults_to_sideways() {
    // With both SMAs absent the current price stands in for each side
    let rows = rows_from(&[100.0, 101.0, 102.0]);
    let summary = technical_summary(&rows, &SummaryConfig::default()).unwrap();
    assert_eq!(summary.trend_direction, TrendDirection::Sideways);
    assert_eq!(summary.rsi, 50.0);
    assert_eq!(summary.support_level, 100.0);
    assert_eq!(summary.resistance_level, 102.0);
    let expected_change = (102.0 - 100.0) / 100.0 * 100.0;
    assert!((summary.price_change_30d - expected_change).abs() < 1e-9);
}

#[test]
fn test_summary_empty_rows() {
    assert!(technical_summary(&[], &SummaryConfig::default()).is_none());
}
