//! Seeded random-walk OHLC generator

use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;
use crate::{
    config::DEFAULT_MAX_SERIES_LENGTH,
    errors::{NexusError, NexusResult},
    series::WalkParams,
    types::PricePoint,
    validation::{validate_series_request, validate_walk_params},
};

/// Everything needed to reproduce a series.
#[derive(Debug, Clone)]
pub struct SeriesRequest {
    pub base_price: f64,
    pub length: usize,
    pub step: TimeDelta,
    pub seed: Option<u64>,
    /// Timestamp of the last point.
    pub end: DateTime<Utc>,
    pub max_length: usize,
}

impl SeriesRequest {
    pub fn new(base_price: f64, length: usize, step: TimeDelta) -> Self {
        Self {
            base_price,
            length,
            step,
            seed: None,
            end: Utc::now(),
            max_length: DEFAULT_MAX_SERIES_LENGTH,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn ending_at(mut self, end: DateTime<Utc>) -> Self {
        self.end = end;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// Lazily yields `length` price points, oldest first.
pub struct SeriesGenerator {
    rng: StdRng,
    midline_step: Normal<f64>,
    close_noise: Normal<f64>,
    wick: Normal<f64>,
    floor: f64,
    midline: f64,
    next_timestamp: DateTime<Utc>,
    step: TimeDelta,
    emitted: usize,
    length: usize,
}

impl SeriesGenerator {
    pub fn new(request: &SeriesRequest, params: &WalkParams) -> NexusResult<Self> {
        validate_series_request(
            request.base_price,
            request.length,
            request.step,
            request.max_length,
        )?;
        validate_walk_params(params)?;

        let base = request.base_price;
        let span = i32::try_from(request.length - 1)
            .ok()
            .and_then(|periods| request.step.checked_mul(periods))
            .ok_or_else(|| NexusError::invalid_parameter("step", "series span overflows"))?;
        let start = request
            .end
            .checked_sub_signed(span)
            .ok_or_else(|| NexusError::invalid_parameter("step", "series start is out of range"))?;

        let rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!(
            base_price = base,
            length = request.length,
            step_secs = request.step.num_seconds(),
            seed = ?request.seed,
            "Starting synthetic series"
        );

        Ok(Self {
            rng,
            midline_step: normal("volatility_pct", base * params.volatility_pct)?,
            close_noise: normal("close_noise_pct", base * params.close_noise_pct)?,
            wick: normal("wick_pct", base * params.wick_pct)?,
            floor: base * params.floor_pct,
            midline: base,
            next_timestamp: start,
            step: request.step,
            emitted: 0,
            length: request.length,
        })
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }
}

fn normal(name: &'static str, std_dev: f64) -> NexusResult<Normal<f64>> {
    Normal::new(0.0, std_dev)
        .map_err(|e| NexusError::invalid_parameter(name, format!("bad distribution: {}", e)))
}

impl Iterator for SeriesGenerator {
    type Item = PricePoint;

    fn next(&mut self) -> Option<PricePoint> {
        if self.emitted >= self.length {
            return None;
        }

        let open = self.midline;
        // The first bar opens and centres on the base price.
        if self.emitted > 0 {
            let delta = self.midline_step.sample(&mut self.rng);
            self.midline = (self.midline + delta).max(self.floor);
        }
        let close = (self.midline + self.close_noise.sample(&mut self.rng)).max(self.floor);
        let high = open.max(close) + self.wick.sample(&mut self.rng).abs();
        let low = (open.min(close) - self.wick.sample(&mut self.rng).abs()).max(self.floor);

        let timestamp = self.next_timestamp;
        self.emitted += 1;
        if self.emitted < self.length {
            self.next_timestamp = timestamp + self.step;
        }

        Some(PricePoint {
            timestamp,
            open,
            high,
            low,
            close,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeriesGenerator {}

/// Generates a series ending now with the default walk shape.
pub fn generate_series(
    base_price: f64,
    length: usize,
    step: TimeDelta,
    seed: Option<u64>,
) -> NexusResult<Vec<PricePoint>> {
    generate_series_ending_at(base_price, length, step, seed, Utc::now())
}

pub fn generate_series_ending_at(
    base_price: f64,
    length: usize,
    step: TimeDelta,
    seed: Option<u64>,
    end: DateTime<Utc>,
) -> NexusResult<Vec<PricePoint>> {
    let request = SeriesRequest::new(base_price, length, step)
        .with_seed(seed)
        .ending_at(end);
    Ok(SeriesGenerator::new(&request, &WalkParams::default())?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_BASE_PRICE, MAX_WALK_FRACTION};
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let a = generate_series(100.0, 5, TimeDelta::days(1), Some(7)).unwrap();
        let b = generate_series(100.0, 5, TimeDelta::days(1), Some(7)).unwrap();
        let ohlc_a: Vec<_> = a.iter().map(PricePoint::ohlc).collect();
        let ohlc_b: Vec<_> = b.iter().map(PricePoint::ohlc).collect();
        assert_eq!(ohlc_a, ohlc_b);
    }

    #[test]
    fn same_seed_and_anchor_is_fully_identical() {
        let a = generate_series_ending_at(250.0, 30, TimeDelta::hours(1), Some(99), anchor()).unwrap();
        let b = generate_series_ending_at(250.0, 30, TimeDelta::hours(1), Some(99), anchor()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_series_ending_at(100.0, 20, TimeDelta::days(1), Some(1), anchor()).unwrap();
        let b = generate_series_ending_at(100.0, 20, TimeDelta::days(1), Some(2), anchor()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn series_ends_at_anchor_with_fixed_spacing() {
        let step = TimeDelta::days(1);
        let points = generate_series_ending_at(45_000.0, 100, step, Some(3), anchor()).unwrap();

        assert_eq!(points.len(), 100);
        assert_eq!(points.last().unwrap().timestamp, anchor());
        assert_eq!(points[0].timestamp, anchor() - TimeDelta::days(99));
        for pair in points.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, step);
        }
    }

    #[test]
    fn first_point_opens_at_base_price() {
        let points = generate_series(80.0, 3, TimeDelta::minutes(5), Some(11)).unwrap();
        assert_eq!(points[0].open, 80.0);
    }

    #[test]
    fn generator_is_lazy_and_exact_size() {
        let request = SeriesRequest::new(100.0, 4, TimeDelta::days(1)).with_seed(Some(5));
        let mut generator = SeriesGenerator::new(&request, &WalkParams::default()).unwrap();
        assert_eq!(generator.len(), 4);
        generator.next();
        assert_eq!(generator.len(), 3);
        assert_eq!(generator.by_ref().count(), 3);
        assert!(generator.next().is_none());
    }

    #[test]
    fn invalid_inputs_fail_fast() {
        assert!(matches!(
            generate_series(0.0, 5, TimeDelta::days(1), None),
            Err(NexusError::InvalidParameter { name: "base_price", .. })
        ));
        assert!(matches!(
            generate_series(-3.0, 5, TimeDelta::days(1), None),
            Err(NexusError::InvalidParameter { .. })
        ));
        assert!(matches!(
            generate_series(100.0, 0, TimeDelta::days(1), None),
            Err(NexusError::InvalidParameter { name: "length", .. })
        ));
    }

    #[test]
    fn extreme_volatility_still_stays_above_floor() {
        let params = WalkParams {
            volatility_pct: 0.5,
            close_noise_pct: 0.5,
            wick_pct: 0.5,
            floor_pct: 0.01,
        };
        let request = SeriesRequest::new(10.0, 2_000, TimeDelta::minutes(1)).with_seed(Some(42));
        let generator = SeriesGenerator::new(&request, &params).unwrap();
        let floor = generator.floor();
        for point in generator {
            assert!(point.is_well_formed(), "{:?}", point);
            assert!(point.low >= floor);
        }
    }

    #[test]
    fn largest_accepted_price_with_widest_walk_stays_finite() {
        let params = WalkParams {
            volatility_pct: MAX_WALK_FRACTION,
            close_noise_pct: MAX_WALK_FRACTION,
            wick_pct: MAX_WALK_FRACTION,
            floor_pct: 0.01,
        };
        let request = SeriesRequest::new(MAX_BASE_PRICE, DEFAULT_MAX_SERIES_LENGTH, TimeDelta::minutes(1))
            .with_seed(Some(1));
        for point in SeriesGenerator::new(&request, &params).unwrap() {
            assert!(point.is_well_formed(), "{:?}", point);
        }
    }

    #[test]
    fn float_max_price_is_rejected() {
        assert!(matches!(
            generate_series(f64::MAX, 50, TimeDelta::days(1), Some(1)),
            Err(NexusError::InvalidParameter { name: "base_price", .. })
        ));
    }

    proptest! {
        #[test]
        fn every_point_is_ordered_and_positive(
            base in 0.01f64..=MAX_BASE_PRICE,
            length in 1usize..200,
            seed in any::<u64>(),
        ) {
            let points = generate_series(base, length, TimeDelta::days(1), Some(seed)).unwrap();
            prop_assert_eq!(points.len(), length);
            for point in &points {
                prop_assert!(point.is_well_formed(), "{:?}", point);
            }
            for pair in points.windows(2) {
                prop_assert!(pair[0].timestamp < pair[1].timestamp);
            }
        }
    }
}
