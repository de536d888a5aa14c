// Application flow: resolve the request from CLI arguments and config, run the engine, render.

use crate::config::toml_config::TomlConfig;
use crate::core::render::{render_outcome, OutputFormat};
use crate::core::ConfigProvider;
use crate::domain::model::{ConversionRequest, TemperatureUnit};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_path, Validate};
use std::path::Path;

pub const DEFAULT_SOURCE_UNIT: TemperatureUnit = TemperatureUnit::Celsius;
pub const DEFAULT_TARGET_UNIT: TemperatureUnit = TemperatureUnit::Fahrenheit;

#[derive(Debug)]
pub struct AppOutcome {
    pub rendered: String,
    pub error: Option<ConvertError>,
}

impl AppOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn exit_code(&self) -> i32 {
        self.error.as_ref().map(ConvertError::exit_code).unwrap_or(0)
    }
}

/// Load and validate the config file, or fall back to an empty config.
pub fn load_config(path: Option<&Path>) -> Result<TomlConfig> {
    let Some(path) = path else {
        return Ok(TomlConfig::default());
    };

    validate_path("config", &path.to_string_lossy())?;
    tracing::debug!("Loading configuration from {}", path.display());

    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

/// Explicit units win, then the provider's defaults, then Celsius to Fahrenheit.
pub fn resolve_request<P: ConfigProvider>(
    raw_value: &str,
    from: Option<TemperatureUnit>,
    to: Option<TemperatureUnit>,
    provider: &P,
) -> ConversionRequest {
    let source = from
        .or_else(|| provider.default_source_unit())
        .unwrap_or(DEFAULT_SOURCE_UNIT);
    let target = to
        .or_else(|| provider.default_target_unit())
        .unwrap_or(DEFAULT_TARGET_UNIT);

    ConversionRequest::new(raw_value, source, target)
}

pub fn resolve_format<P: ConfigProvider>(format: Option<OutputFormat>, provider: &P) -> OutputFormat {
    format.or_else(|| provider.output_format()).unwrap_or_default()
}

/// Run one conversion. Validation failures are part of a successful run:
/// they come back rendered as the error banner, with the error attached.
pub fn run(request: &ConversionRequest, format: OutputFormat) -> Result<AppOutcome> {
    let outcome = request.execute();
    let rendered = render_outcome(&outcome, format)?;

    match outcome {
        Ok(conversion) => {
            tracing::info!(
                "Converted {} {} to {}",
                request.raw_value.trim(),
                request.source_unit.symbol(),
                conversion
            );
            Ok(AppOutcome {
                rendered,
                error: None,
            })
        }
        Err(error) => {
            tracing::warn!(code = error.code(), "Conversion rejected: {}", error);
            Ok(AppOutcome {
                rendered,
                error: Some(error.into()),
            })
        }
    }
}
