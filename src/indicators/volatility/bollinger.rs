//! Bollinger Bands indicator

use crate::common::math;

/// Calculate Bollinger Band series
///
/// Middle Band = SMA(window)
/// Upper Band = Middle + (k * standard deviation)
/// Lower Band = Middle - (k * standard deviation)
///
/// Returns (middle, upper, lower). The middle band follows the SMA
/// presence rule; the outer bands additionally need a defined standard
/// deviation over the window.
pub fn bollinger_series(
    values: &[f64],
    window: usize,
    k: f64,
) -> (Vec<Option<f64>>, Vec<Option<f64>>, Vec<Option<f64>>) {
    let len = values.len();
    let mut middle = vec![None; len];
    let mut upper = vec![None; len];
    let mut lower = vec![None; len];
    if window == 0 {
        return (middle, upper, lower);
    }

    for i in 0..len {
        if i + 1 < window {
            continue;
        }
        let slice = &values[i + 1 - window..=i];
        if let Some(mid) = math::mean(slice) {
            middle[i] = Some(mid);
            if let Some(std) = math::sample_std(slice) {
                upper[i] = Some(mid + k * std);
                lower[i] = Some(mid - k * std);
            }
        }
    }
    (middle, upper, lower)
}
