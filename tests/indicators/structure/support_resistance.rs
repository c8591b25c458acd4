//! Unit tests for support and resistance levels

use coinsight::indicators::structure::support_resistance;

#[test]
fn test_support_resistance_basic() {
    let result = support_resistance(&[5.0, 1.0, 9.0, 3.0], 10);
    assert_eq!(result, Some((1.0, 9.0)));
}

#[test]
fn test_support_resistance_trailing_window_only() {
    // The spike at the start falls outside the lookback
    let prices = [100.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let result = support_resistance(&prices, 5);
    assert_eq!(result, Some((1.0, 5.0)));
}

#[test]
fn test_support_resistance_short_series() {
    let result = support_resistance(&[42.0], 30);
    assert_eq!(result, Some((42.0, 42.0)));
}

#[test]
fn test_support_resistance_empty() {
    assert!(support_resistance(&[], 30).is_none());
    assert!(support_resistance(&[1.0], 0).is_none());
}
