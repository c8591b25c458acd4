//! EMA (Exponential Moving Average) indicator

/// Calculate the EMA series for a span
///
/// alpha = 2 / (span + 1)
/// ema[0] = values[0]
/// ema[i] = alpha * values[i] + (1 - alpha) * ema[i-1]
///
/// Seeded at the first value, so the series is defined on every index.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    out.push(values[0]);
    for &value in &values[1..] {
        let prev = out[out.len() - 1];
        out.push(alpha * value + (1.0 - alpha) * prev);
    }
    out
}
