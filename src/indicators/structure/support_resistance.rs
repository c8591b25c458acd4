//! Support and Resistance levels

/// Calculate support and resistance over the trailing window
///
/// Support = lowest price, resistance = highest price within the last
/// `lookback` values (the whole series when shorter). None for an
/// empty series or a zero lookback.
pub fn support_resistance(prices: &[f64], lookback: usize) -> Option<(f64, f64)> {
    if prices.is_empty() || lookback == 0 {
        return None;
    }

    let recent = &prices[prices.len().saturating_sub(lookback)..];
    let support = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let resistance = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((support, resistance))
}
