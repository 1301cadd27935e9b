//! Synthetic price point types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One OHLC bar of a synthetic series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    pub fn ohlc(&self) -> (f64, f64, f64, f64) {
        (self.open, self.high, self.low, self.close)
    }

    /// `low <= open, close <= high` and every price finite and strictly positive.
    pub fn is_well_formed(&self) -> bool {
        self.high.is_finite()
            && self.low > 0.0
            && self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }
}
