//! Price series input types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily closing price
///
/// Series handed to the engine are ascending by date with unique dates
/// and positive prices; the caller normalizes before invoking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}
