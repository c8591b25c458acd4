//! Insight report types returned to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ensemble forecast plus the per-strategy forecasts it was blended from
///
/// Every sequence has one entry per forecast day, in horizon order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub forecasts: Vec<f64>,
    pub sma_forecast: Vec<f64>,
    pub linear_forecast: Vec<f64>,
    pub exp_forecast: Vec<f64>,
}

/// Direction of the short-vs-long moving-average comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Sideways,
}

/// Classification of the current RSI reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

/// Current-state classification of the series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSummary {
    pub trend_direction: TrendDirection,
    pub price_change_30d: f64,
    pub rsi: f64,
    pub rsi_signal: RsiSignal,
    pub support_level: f64,
    pub resistance_level: f64,
}

/// Forecast strategies scored by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    MovingAverage,
    LinearTrend,
    ExponentialSmoothing,
}

/// Hold-out accuracy of one strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StrategyScore {
    pub mae: f64,
}

/// Per-strategy hold-out scores
///
/// Empty when the series is too short to split; ordered by strategy so
/// serialization is stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub scores: BTreeMap<StrategyKind, StrategyScore>,
}

impl PerformanceReport {
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Everything the engine computes for one series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub forecast: ForecastBundle,
    pub summary: TechnicalSummary,
    pub performance: PerformanceReport,
    pub point_count: usize,
}
