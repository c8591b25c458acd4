//! Forecast strategies and their weighted ensemble.

pub mod ensemble;
pub mod error;
pub mod exponential;
pub mod linear_trend;
pub mod moving_average;
pub mod weights;

pub use ensemble::ensemble_forecast;
pub use error::ForecastSkip;
pub use weights::EnsembleWeights;
