//! Insight assembly: summary, evaluation and the engine entry point.

pub mod engine;
pub mod error;
pub mod evaluation;
pub mod summary;

pub use engine::InsightEngine;
pub use error::InsightError;
pub use evaluation::{evaluate_strategies, MIN_TRAIN_ROWS};
pub use summary::technical_summary;
