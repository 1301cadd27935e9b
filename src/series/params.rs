//! Random walk shape parameters

use serde::Serialize;
use crate::config::{
    DEFAULT_CLOSE_NOISE_PCT, DEFAULT_FLOOR_PCT, DEFAULT_VOLATILITY_PCT, DEFAULT_WICK_PCT,
};

/// Shape of the walk, every field a fraction of the base price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WalkParams {
    /// Standard deviation of the midline step.
    pub volatility_pct: f64,
    /// Standard deviation of the close around the midline.
    pub close_noise_pct: f64,
    /// Standard deviation of the high/low wick offsets.
    pub wick_pct: f64,
    /// No price is ever emitted below `floor_pct * base_price`.
    pub floor_pct: f64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            volatility_pct: DEFAULT_VOLATILITY_PCT,
            close_noise_pct: DEFAULT_CLOSE_NOISE_PCT,
            wick_pct: DEFAULT_WICK_PCT,
            floor_pct: DEFAULT_FLOOR_PCT,
        }
    }
}
