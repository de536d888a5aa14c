use crate::domain::model::TemperatureUnit;
use crate::utils::error::{ConvertError, Result, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parse raw user input as a finite number. Surrounding whitespace is ignored;
/// anything else that is not part of the number is rejected.
pub fn parse_finite_number(raw_value: &str) -> std::result::Result<f64, ValidationError> {
    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidNumber);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber),
    }
}

pub fn ensure_distinct_units(
    source: TemperatureUnit,
    target: TemperatureUnit,
) -> std::result::Result<(), ValidationError> {
    if source == target {
        return Err(ValidationError::SameUnit);
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ConvertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
