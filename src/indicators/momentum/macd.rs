//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::ema::ema_series;

/// MACD line and signal line from precomputed fast/slow EMA series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(MACD, signal span)
pub fn macd_from_emas(
    ema_fast: &[f64],
    ema_slow: &[f64],
    signal_span: usize,
) -> (Vec<f64>, Vec<f64>) {
    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal = ema_series(&macd, signal_span);
    (macd, signal)
}

/// Calculate the MACD and signal series from raw values
pub fn macd_series(
    values: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> (Vec<f64>, Vec<f64>) {
    let fast = ema_series(values, fast_span);
    let slow = ema_series(values, slow_span);
    macd_from_emas(&fast, &slow, signal_span)
}
