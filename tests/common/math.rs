//! Unit tests for shared math helpers

use coinsight::common::math::{mean, mean_absolute_error, sample_std};

#[test]
fn test_mean_basic() {
    let result = mean(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(result, Some(2.5));
}

#[test]
fn test_mean_empty() {
    assert!(mean(&[]).is_none());
}

#[test]
fn test_sample_std_known_value() {
    // Variance of 1..5 around 3 is 10/4 = 2.5
    let result = sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(result.is_some());
    assert!((result.unwrap() - 2.5_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_sample_std_constant_is_zero() {
    let result = sample_std(&[7.0, 7.0, 7.0, 7.0]);
    assert_eq!(result, Some(0.0));
}

#[test]
fn test_sample_std_needs_two_values() {
    assert!(sample_std(&[]).is_none());
    assert!(sample_std(&[42.0]).is_none());
}

#[test]
fn test_mae_basic() {
    let result = mean_absolute_error(&[1.0, 2.0, 3.0], &[2.0, 2.0, 5.0]);
    assert!(result.is_some());
    assert!((result.unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_mae_perfect_prediction() {
    let result = mean_absolute_error(&[1.0, 2.0], &[1.0, 2.0]);
    assert_eq!(result, Some(0.0));
}

#[test]
fn test_mae_rejects_mismatched_lengths() {
    assert!(mean_absolute_error(&[1.0, 2.0], &[1.0]).is_none());
    assert!(mean_absolute_error(&[], &[]).is_none());
}
