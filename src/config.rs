//! Engine configuration
//!
//! Every tunable is an explicit struct handed to the engine, with
//! defaults matching the standard indicator windows. Environment
//! overrides apply only to the top-level knobs.

use crate::forecast::weights::EnsembleWeights;
use std::env;

/// Window and span settings for the indicator table
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub sma_short: usize,
    pub sma_long: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub macd_signal_span: usize,
    pub rsi_period: usize,
    pub return_period: usize,
    pub volatility_window: usize,
    pub bollinger_window: usize,
    pub bollinger_k: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_short: 7,
            sma_long: 21,
            ema_fast: 12,
            ema_slow: 26,
            macd_signal_span: 9,
            rsi_period: 14,
            return_period: 7,
            volatility_window: 7,
            bollinger_window: 20,
            bollinger_k: 2.0,
        }
    }
}

/// Settings for the forecast strategies and their blend
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub ma_window: usize,
    pub min_trend_points: usize,
    pub smoothing_alpha: f64,
    pub weights: EnsembleWeights,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            ma_window: 7,
            min_trend_points: 10,
            smoothing_alpha: 0.3,
            weights: EnsembleWeights::default(),
        }
    }
}

/// Settings for the technical summary classification
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub lookback: usize,
    pub overbought: f64,
    pub oversold: f64,
    pub neutral_rsi: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            lookback: 30,
            overbought: 70.0,
            oversold: 30.0,
            neutral_rsi: 50.0,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub horizon: usize,
    pub evaluation_window: usize,
    pub indicators: IndicatorConfig,
    pub forecast: ForecastConfig,
    pub summary: SummaryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon: 7,
            evaluation_window: 7,
            indicators: IndicatorConfig::default(),
            forecast: ForecastConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Build a config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let horizon: usize = env::var("COINSIGHT_HORIZON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.horizon);
        let evaluation_window: usize = env::var("COINSIGHT_EVALUATION_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.evaluation_window);

        Self {
            horizon,
            evaluation_window,
            ..defaults
        }
    }

    /// Set the forecast horizon in days
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the hold-out window used by the evaluator
    pub fn with_evaluation_window(mut self, evaluation_window: usize) -> Self {
        self.evaluation_window = evaluation_window;
        self
    }
}

/// Get the current environment (development, production, etc.)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}
