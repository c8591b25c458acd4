//! Technical indicators computed as full series over the input prices.

pub mod builder;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use builder::build_indicator_rows;
