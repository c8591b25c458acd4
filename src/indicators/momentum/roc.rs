//! Rate of change (period-over-period returns)

/// Percent change from the previous value; absent at the first position
pub fn pct_change(values: &[f64]) -> Vec<Option<f64>> {
    pct_change_period(values, 1)
}

/// Percent change from `period` positions back; absent until that far in
pub fn pct_change_period(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }

    for i in period..values.len() {
        let base = values[i - period];
        out[i] = Some((values[i] - base) / base);
    }
    out
}
