//! Series request validation

use chrono::TimeDelta;
use crate::config::{MAX_BASE_PRICE, MAX_WALK_FRACTION};
use crate::errors::{NexusError, NexusResult};
use crate::series::WalkParams;

pub fn validate_series_request(
    base_price: f64,
    length: usize,
    step: TimeDelta,
    max_length: usize,
) -> NexusResult<()> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(NexusError::invalid_parameter(
            "base_price",
            format!("must be a finite positive price, got {}", base_price),
        ));
    }

    if base_price > MAX_BASE_PRICE {
        return Err(NexusError::invalid_parameter(
            "base_price",
            format!("{} exceeds the maximum of {}", base_price, MAX_BASE_PRICE),
        ));
    }

    if length == 0 {
        return Err(NexusError::invalid_parameter("length", "must be at least 1"));
    }

    if length > max_length {
        return Err(NexusError::invalid_parameter(
            "length",
            format!("{} exceeds the maximum of {} points", length, max_length),
        ));
    }

    if step <= TimeDelta::zero() {
        return Err(NexusError::invalid_parameter(
            "step",
            format!("must be a positive duration, got {}", step),
        ));
    }

    Ok(())
}

pub fn validate_walk_params(params: &WalkParams) -> NexusResult<()> {
    let fractions = [
        ("volatility_pct", params.volatility_pct),
        ("close_noise_pct", params.close_noise_pct),
        ("wick_pct", params.wick_pct),
    ];
    for (name, value) in fractions {
        if !(0.0..=MAX_WALK_FRACTION).contains(&value) {
            return Err(NexusError::invalid_parameter(
                name,
                format!("must be a fraction within [0, {}], got {}", MAX_WALK_FRACTION, value),
            ));
        }
    }

    if !(params.floor_pct > 0.0 && params.floor_pct < 1.0) {
        return Err(NexusError::invalid_parameter(
            "floor_pct",
            format!("must be within (0, 1), got {}", params.floor_pct),
        ));
    }

    Ok(())
}
