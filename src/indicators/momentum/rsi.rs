//! RSI (Relative Strength Index) indicator

/// Calculate the RSI series
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss over the trailing `period` deltas
///
/// Absent until `period` deltas exist. When the average loss is zero
/// with gains present, RS is infinite and RSI saturates at 100; a
/// window with no movement at all has no defined RSI.
pub fn rsi_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period + 1 {
        return out;
    }

    let mut gains = Vec::with_capacity(values.len() - 1);
    let mut losses = Vec::with_capacity(values.len() - 1);
    for i in 1..values.len() {
        let change = values[i] - values[i - 1];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    // Delta j describes the move into position j + 1, so the trailing
    // window at position i covers deltas i - period .. i.
    for i in period..values.len() {
        let avg_gain: f64 = gains[i - period..i].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[i - period..i].iter().sum::<f64>() / period as f64;

        out[i] = if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                None
            } else {
                Some(100.0)
            }
        } else {
            let rs = avg_gain / avg_loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        };
    }
    out
}
