//! Shared data models spanning the engine layers.

pub mod features;
pub mod insight;
pub mod price;

pub use features::IndicatorRow;
pub use insight::{
    ForecastBundle, InsightReport, PerformanceReport, RsiSignal, StrategyKind, StrategyScore,
    TechnicalSummary, TrendDirection,
};
pub use price::PricePoint;
