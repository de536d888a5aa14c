//! Decimal rounding of conversion results.
//!
//! The value is first written in its shortest round-tripping decimal form,
//! then rounded half away from zero with exact decimal arithmetic. This keeps
//! results like `1.005` rounding up to `1.01`, which a plain
//! multiply/round/divide on `f64` gets wrong.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places every conversion result is rounded to.
pub const RESULT_DECIMAL_PLACES: u32 = 2;

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn round_half_away_from_zero(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let rounded = match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| scaled_round(value, places)),
        // Outside Decimal's range (roughly 7.9e28)
        Err(_) => scaled_round(value, places),
    };

    // -0.001 rounds to -0.00; report it as plain zero
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn scaled_round(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    // Past 2^53 an f64 carries no digits below the requested place
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    scaled.round() / factor
}
