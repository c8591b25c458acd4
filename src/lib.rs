//! Coinsight: technical indicators and naive price forecasting for
//! daily crypto price series.
//!
//! The engine consumes an ordered series of dated prices and returns a
//! structured report: a per-point indicator table feeds an ensemble of
//! three forecast strategies, a technical summary of the current state,
//! and a hold-out evaluation scoring each strategy by mean absolute
//! error. All computation is pure and synchronous; fetching, storage
//! and rendering belong to the caller.

pub mod common;
pub mod config;
pub mod forecast;
pub mod indicators;
pub mod insights;
pub mod logging;
pub mod models;

pub use config::EngineConfig;
pub use insights::engine::InsightEngine;
pub use insights::error::InsightError;
pub use models::insight::InsightReport;
pub use models::price::PricePoint;
