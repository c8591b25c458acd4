//! Forecast strategy skip conditions

use thiserror::Error;

/// Reasons a strategy declines to produce a forecast
///
/// A skip is resolved by the caller through the strategy's documented
/// fallback; it never reaches the engine's public interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForecastSkip {
    #[error("not enough history for the strategy window")]
    InsufficientData,
    #[error("model fit produced a degenerate solution")]
    FitFailed,
}
