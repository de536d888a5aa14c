use crate::core::rounding::{round_half_away_from_zero, RESULT_DECIMAL_PLACES};
use crate::domain::model::TemperatureUnit;
use crate::utils::error::ValidationError;
use crate::utils::validation::{ensure_distinct_units, parse_finite_number};

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert `raw_value` from `source` to `target`, rounded to two decimal places.
///
/// The input is validated first (a finite number, then two different units);
/// the conversion always goes through Celsius.
pub fn convert(
    raw_value: &str,
    source: TemperatureUnit,
    target: TemperatureUnit,
) -> Result<f64, ValidationError> {
    let value = parse_finite_number(raw_value)?;
    ensure_distinct_units(source, target)?;

    let celsius = to_celsius(value, source);
    let converted = from_celsius(celsius, target);
    if !converted.is_finite() {
        tracing::debug!(raw_value, "conversion overflowed");
        return Err(ValidationError::InvalidNumber);
    }

    let rounded = round_half_away_from_zero(converted, RESULT_DECIMAL_PLACES);
    tracing::debug!(
        "{} {} -> {} {} (celsius: {}, unrounded: {})",
        value,
        source.symbol(),
        rounded,
        target.symbol(),
        celsius,
        converted
    );

    Ok(rounded)
}

fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    }
}

fn from_celsius(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
    }
}
