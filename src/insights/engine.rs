//! Insight engine composing indicators, forecasts and evaluation.

use crate::config::EngineConfig;
use crate::forecast::ensemble::ensemble_forecast;
use crate::indicators::builder::build_indicator_rows;
use crate::insights::error::InsightError;
use crate::insights::evaluation::evaluate_strategies;
use crate::insights::summary::technical_summary;
use crate::models::insight::InsightReport;
use crate::models::price::PricePoint;
use tracing::info;

/// Pure computation engine over ordered price series
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: EngineConfig,
}

impl InsightEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the full insight report for a price series
    ///
    /// The series must be ascending by date with unique dates; that is
    /// a caller precondition, only emptiness is validated here.
    pub fn compute_insights(&self, series: &[PricePoint]) -> Result<InsightReport, InsightError> {
        if series.is_empty() {
            return Err(InsightError::EmptySeries);
        }
        debug_assert!(
            series.windows(2).all(|pair| pair[0].date < pair[1].date),
            "price series must be ascending with unique dates"
        );

        let rows = build_indicator_rows(series, &self.config.indicators);
        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();

        let forecast = ensemble_forecast(&prices, self.config.horizon, &self.config.forecast)
            .ok_or(InsightError::EmptySeries)?;
        let summary =
            technical_summary(&rows, &self.config.summary).ok_or(InsightError::EmptySeries)?;
        let performance =
            evaluate_strategies(&rows, self.config.evaluation_window, &self.config.forecast);

        info!(
            points = series.len(),
            horizon = self.config.horizon,
            evaluated = !performance.is_empty(),
            "computed insight report"
        );

        Ok(InsightReport {
            forecast,
            summary,
            performance,
            point_count: series.len(),
        })
    }
}
