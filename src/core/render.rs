use crate::domain::model::{Conversion, TemperatureUnit};
use crate::utils::error::{ConvertError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConvertError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ConvertError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Serialize)]
struct SuccessView {
    ok: bool,
    value: f64,
    unit: TemperatureUnit,
    symbol: &'static str,
    display: String,
}

#[derive(Serialize)]
struct FailureView {
    ok: bool,
    code: &'static str,
    message: String,
}

/// Render either the converted value or the error banner.
pub fn render_outcome(
    outcome: &std::result::Result<Conversion, ValidationError>,
    format: OutputFormat,
) -> Result<String> {
    match (format, outcome) {
        (OutputFormat::Text, Ok(conversion)) => Ok(conversion.to_string()),
        (OutputFormat::Text, Err(error)) => Ok(format!("Error: {}", error)),
        (OutputFormat::Json, Ok(conversion)) => Ok(serde_json::to_string(&SuccessView {
            ok: true,
            value: conversion.value,
            unit: conversion.unit,
            symbol: conversion.unit.symbol(),
            display: conversion.to_string(),
        })?),
        (OutputFormat::Json, Err(error)) => Ok(serde_json::to_string(&FailureView {
            ok: false,
            code: error.code(),
            message: error.to_string(),
        })?),
    }
}
