//! Derived feature table types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the indicator table, aligned with one input point
///
/// Windowed columns are absent until enough trailing history exists.
/// The EMAs (and the MACD pair built from them) are seeded at the first
/// price and therefore defined on every row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    pub ema_fast: f64,
    pub ema_slow: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    pub macd: f64,
    pub macd_signal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_middle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_lower: Option<f64>,
}
