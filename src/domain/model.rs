use crate::core::engine;
use crate::utils::error::{ConvertError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Single-letter symbol shown after the degree sign.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConvertError::UnknownUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TemperatureUnit {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One conversion as entered by the user: raw text plus the two unit selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub raw_value: String,
    pub source_unit: TemperatureUnit,
    pub target_unit: TemperatureUnit,
}

impl ConversionRequest {
    pub fn new(
        raw_value: impl Into<String>,
        source_unit: TemperatureUnit,
        target_unit: TemperatureUnit,
    ) -> Self {
        Self {
            raw_value: raw_value.into(),
            source_unit,
            target_unit,
        }
    }

    pub fn execute(&self) -> Result<Conversion, ValidationError> {
        let value = engine::convert(&self.raw_value, self.source_unit, self.target_unit)?;
        Ok(Conversion {
            value,
            unit: self.target_unit,
        })
    }
}

/// A successful conversion, rounded to two decimal places and tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}", self.value, self.unit.symbol())
    }
}
