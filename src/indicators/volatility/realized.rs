//! Rolling volatility of period returns

use crate::common::math;

/// Standard deviation of the trailing `window` returns
///
/// Operates on the period-return series, whose first entry is absent;
/// a position is defined only once its whole trailing window holds
/// actual returns. Sample standard deviation (n - 1 denominator).
pub fn rolling_volatility(returns: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; returns.len()];
    if window == 0 {
        return out;
    }

    for i in 0..returns.len() {
        if i + 1 < window {
            continue;
        }
        let present: Vec<f64> = returns[i + 1 - window..=i].iter().flatten().copied().collect();
        if present.len() < window {
            continue;
        }
        out[i] = math::sample_std(&present);
    }
    out
}
