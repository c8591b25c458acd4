//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate the SMA series for a window
///
/// Each position holds the mean of the trailing `window` prices;
/// absent until a full window is available.
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }

    for i in 0..values.len() {
        if i + 1 < window {
            continue;
        }
        out[i] = math::mean(&values[i + 1 - window..=i]);
    }
    out
}
