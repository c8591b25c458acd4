//! Momentum indicators: returns, RSI, MACD

pub mod macd;
pub mod roc;
pub mod rsi;

pub use macd::*;
pub use roc::*;
pub use rsi::*;
