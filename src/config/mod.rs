pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::model::TemperatureUnit;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "thermo-convert")]
#[command(about = "Convert a temperature between Celsius, Fahrenheit and Kelvin")]
pub struct CliConfig {
    /// Temperature value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Source unit (c, f, k)
    #[arg(short, long)]
    pub from: Option<TemperatureUnit>,

    /// Target unit (c, f, k)
    #[arg(short, long)]
    pub to: Option<TemperatureUnit>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
