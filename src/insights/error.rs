//! Engine error types

use thiserror::Error;

/// Caller-visible engine failures
///
/// Short series never error; indicators and strategies degrade to
/// absent values and fallbacks instead. Only a series with nothing in
/// it at all is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsightError {
    #[error("price series is empty")]
    EmptySeries,
}
