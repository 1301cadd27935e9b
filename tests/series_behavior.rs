//! Behavior tests for the synthetic series generator

use chrono::{TimeDelta, TimeZone, Utc};
use nexus_feed::series::{commodity_series_ending_at, SeriesRequest, DEFAULT_TREND_LENGTH};
use nexus_feed::{
    generate_series, Commodity, Config, MarketHub, NexusError, PricePoint, SeriesGenerator,
    WalkParams,
};

#[test]
fn repeated_seeded_requests_give_identical_bars() {
    let first = generate_series(100.0, 5, TimeDelta::days(1), Some(2024)).expect("series");
    let second = generate_series(100.0, 5, TimeDelta::days(1), Some(2024)).expect("series");

    let a: Vec<_> = first.iter().map(PricePoint::ohlc).collect();
    let b: Vec<_> = second.iter().map(PricePoint::ohlc).collect();
    assert_eq!(a, b);
}

#[test]
fn unseeded_requests_are_still_well_formed() {
    let points = generate_series(45_000.0, 100, TimeDelta::days(1), None).expect("series");
    assert_eq!(points.len(), 100);
    assert!(points.iter().all(PricePoint::is_well_formed));
}

#[test]
fn every_catalog_commodity_produces_a_trend() {
    let config = Config::new("unused.csv");
    let end = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();

    for commodity in Commodity::ALL {
        for hub in MarketHub::ALL {
            let trend = commodity_series_ending_at(
                commodity,
                hub,
                DEFAULT_TREND_LENGTH,
                TimeDelta::days(1),
                Some(9),
                end,
                &config,
            )
            .expect("trend");
            assert_eq!(trend.points.len(), DEFAULT_TREND_LENGTH);
            assert_eq!(trend.points.last().map(|p| p.timestamp), Some(end));
            assert!(trend.points.iter().all(PricePoint::is_well_formed));
        }
    }
}

#[test]
fn custom_walk_shape_is_validated() {
    let request = SeriesRequest::new(100.0, 10, TimeDelta::hours(1));
    let params = WalkParams {
        floor_pct: 1.5,
        ..WalkParams::default()
    };

    let err = SeriesGenerator::new(&request, &params).err().expect("invalid floor");
    assert!(matches!(err, NexusError::InvalidParameter { name: "floor_pct", .. }));
}

#[test]
fn flat_walk_stays_at_base_price() {
    let request = SeriesRequest::new(250.0, 20, TimeDelta::hours(4)).with_seed(Some(1));
    let params = WalkParams {
        volatility_pct: 0.0,
        close_noise_pct: 0.0,
        wick_pct: 0.0,
        floor_pct: 0.01,
    };

    for point in SeriesGenerator::new(&request, &params).expect("generator") {
        assert_eq!(point.ohlc(), (250.0, 250.0, 250.0, 250.0));
    }
}
