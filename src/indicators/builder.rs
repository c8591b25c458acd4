//! Indicator table construction
//!
//! Computes every indicator as a full series over the input prices,
//! then zips them into one row per point. Every column uses trailing
//! windows only, so a row never depends on later points.

use crate::config::IndicatorConfig;
use crate::indicators::momentum::{macd, roc, rsi};
use crate::indicators::trend::{ema, sma};
use crate::indicators::volatility::{bollinger, realized};
use crate::models::features::IndicatorRow;
use crate::models::price::PricePoint;

/// Build one indicator row per price point, same length and order
pub fn build_indicator_rows(series: &[PricePoint], config: &IndicatorConfig) -> Vec<IndicatorRow> {
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();

    let sma_short = sma::sma_series(&prices, config.sma_short);
    let sma_long = sma::sma_series(&prices, config.sma_long);
    let ema_fast = ema::ema_series(&prices, config.ema_fast);
    let ema_slow = ema::ema_series(&prices, config.ema_slow);
    let price_change = roc::pct_change(&prices);
    let price_change_period = roc::pct_change_period(&prices, config.return_period);
    let volatility = realized::rolling_volatility(&price_change, config.volatility_window);
    let rsi = rsi::rsi_series(&prices, config.rsi_period);
    let (macd_line, macd_signal) =
        macd::macd_from_emas(&ema_fast, &ema_slow, config.macd_signal_span);
    let (bb_middle, bb_upper, bb_lower) =
        bollinger::bollinger_series(&prices, config.bollinger_window, config.bollinger_k);

    series
        .iter()
        .enumerate()
        .map(|(i, point)| IndicatorRow {
            date: point.date,
            price: point.price,
            sma_short: sma_short[i],
            sma_long: sma_long[i],
            ema_fast: ema_fast[i],
            ema_slow: ema_slow[i],
            price_change: price_change[i],
            price_change_period: price_change_period[i],
            volatility: volatility[i],
            rsi: rsi[i],
            macd: macd_line[i],
            macd_signal: macd_signal[i],
            bb_middle: bb_middle[i],
            bb_upper: bb_upper[i],
            bb_lower: bb_lower[i],
        })
        .collect()
}
