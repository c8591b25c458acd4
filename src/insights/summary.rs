//! Current-state technical summary

use crate::config::SummaryConfig;
use crate::indicators::structure::support_resistance;
use crate::models::features::IndicatorRow;
use crate::models::insight::{RsiSignal, TechnicalSummary, TrendDirection};

/// Classify the current state of the series from its indicator rows
///
/// An absent RSI reads as the configured neutral value, and an absent
/// SMA reads as the current price, so short histories still classify.
/// None for an empty table.
pub fn technical_summary(rows: &[IndicatorRow], config: &SummaryConfig) -> Option<TechnicalSummary> {
    let last = rows.last()?;
    let current_price = last.price;

    let base = rows[rows.len().saturating_sub(config.lookback)].price;
    let price_change_30d = (current_price - base) / base * 100.0;

    let rsi = last.rsi.unwrap_or(config.neutral_rsi);
    let rsi_signal = if rsi > config.overbought {
        RsiSignal::Overbought
    } else if rsi < config.oversold {
        RsiSignal::Oversold
    } else {
        RsiSignal::Neutral
    };

    let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
    let (support_level, resistance_level) = support_resistance(&prices, config.lookback)?;

    let sma_short = last.sma_short.unwrap_or(current_price);
    let sma_long = last.sma_long.unwrap_or(current_price);
    let trend_direction = if sma_short > sma_long {
        TrendDirection::Bullish
    } else if sma_short < sma_long {
        TrendDirection::Bearish
    } else {
        TrendDirection::Sideways
    };

    Some(TechnicalSummary {
        trend_direction,
        price_change_30d,
        rsi,
        rsi_signal,
        support_level,
        resistance_level,
    })
}
