//! Commodity price trends for the market intel view

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use crate::{
    config::Config,
    errors::NexusResult,
    series::{SeriesGenerator, SeriesRequest},
    types::{Commodity, MarketHub, PricePoint},
};

/// Default trend window: 100 daily bars ending now.
pub const DEFAULT_TREND_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct CommoditySeries {
    pub commodity: Commodity,
    pub hub: MarketHub,
    pub base_price: f64,
    pub points: Vec<PricePoint>,
}

impl CommoditySeries {
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    /// Percentage move from the first open to the last close.
    pub fn change_pct(&self) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((last.close - first.open) / first.open * 100.0)
    }
}

pub fn commodity_series(
    commodity: Commodity,
    hub: MarketHub,
    length: usize,
    step: TimeDelta,
    seed: Option<u64>,
    config: &Config,
) -> NexusResult<CommoditySeries> {
    commodity_series_ending_at(commodity, hub, length, step, seed, Utc::now(), config)
}

pub fn commodity_series_ending_at(
    commodity: Commodity,
    hub: MarketHub,
    length: usize,
    step: TimeDelta,
    seed: Option<u64>,
    end: DateTime<Utc>,
    config: &Config,
) -> NexusResult<CommoditySeries> {
    let base_price = commodity.base_price();
    let request = SeriesRequest::new(base_price, length, step)
        .with_seed(seed)
        .ending_at(end)
        .with_max_length(config.max_series_length);
    let points = SeriesGenerator::new(&request, &config.walk)?.collect();

    Ok(CommoditySeries {
        commodity,
        hub,
        base_price,
        points,
    })
}
