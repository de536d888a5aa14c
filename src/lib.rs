pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::engine::convert;
pub use core::render::{render_outcome, OutputFormat};
pub use domain::model::{Conversion, ConversionRequest, TemperatureUnit};
pub use utils::error::{ConvertError, Result, ValidationError};
