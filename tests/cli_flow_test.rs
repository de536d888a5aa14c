#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;
use thermo_convert::app;
use thermo_convert::{CliConfig, ConvertError, OutputFormat, TemperatureUnit, TomlConfig};

fn run_cli(args: &[&str]) -> Result<app::AppOutcome> {
    let cli = CliConfig::try_parse_from(args)?;
    let config = app::load_config(cli.config.as_deref())?;
    let request = app::resolve_request(&cli.value, cli.from, cli.to, &config);
    let format = app::resolve_format(cli.format, &config);
    Ok(app::run(&request, format)?)
}

#[test]
fn test_explicit_units() -> Result<()> {
    let outcome = run_cli(&["thermo-convert", "100", "--from", "c", "--to", "f"])?;
    assert!(outcome.is_success());
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(outcome.rendered, "212°F");
    Ok(())
}

#[test]
fn test_negative_value_and_short_flags() -> Result<()> {
    let outcome = run_cli(&["thermo-convert", "-40", "-f", "fahrenheit", "-t", "celsius"])?;
    assert_eq!(outcome.rendered, "-40°C");
    Ok(())
}

#[test]
fn test_builtin_defaults_are_celsius_to_fahrenheit() -> Result<()> {
    let outcome = run_cli(&["thermo-convert", "0"])?;
    assert_eq!(outcome.rendered, "32°F");
    Ok(())
}

#[test]
fn test_config_file_supplies_defaults_and_format() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[defaults]
from = "celsius"
to = "kelvin"

[output]
format = "json"
"#
    )?;
    let path = config_file.path().to_str().unwrap().to_string();

    let outcome = run_cli(&["thermo-convert", "0", "--config", &path])?;
    let parsed: serde_json::Value = serde_json::from_str(&outcome.rendered)?;
    assert_eq!(parsed["ok"], true);
    assert_eq!(parsed["value"], 273.15);
    assert_eq!(parsed["unit"], "kelvin");

    // CLI flags still win over the file
    let outcome = run_cli(&[
        "thermo-convert", "0", "--config", &path, "--to", "f", "--format", "text",
    ])?;
    assert_eq!(outcome.rendered, "32°F");
    Ok(())
}

#[test]
fn test_same_unit_is_reported_with_exit_code_two() -> Result<()> {
    let outcome = run_cli(&["thermo-convert", "10", "--from", "c", "--to", "c"])?;
    assert!(!outcome.is_success());
    assert_eq!(outcome.exit_code(), 2);
    assert_eq!(outcome.rendered, "Error: Please select two different units");
    Ok(())
}

#[test]
fn test_invalid_number_as_json() -> Result<()> {
    let outcome = run_cli(&["thermo-convert", "abc", "--format", "json"])?;
    let parsed: serde_json::Value = serde_json::from_str(&outcome.rendered)?;
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["code"], "invalid_number");
    assert_eq!(parsed["message"], "Please enter a valid number");
    Ok(())
}

#[test]
fn test_unknown_unit_is_an_argument_error() {
    let result = CliConfig::try_parse_from(["thermo-convert", "10", "--from", "rankine"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    write!(config_file, "[defaults]\nfrom = \"k\"\nto = \"kelvin\"\n")?;

    let result = app::load_config(Some(config_file.path()));
    assert!(matches!(result, Err(ConvertError::InvalidConfigValue { .. })));
    Ok(())
}

#[test]
fn test_resolve_format_defaults_to_text() {
    assert_eq!(app::resolve_format(None, &TomlConfig::default()), OutputFormat::Text);
    assert_eq!(
        app::resolve_request("1", None, Some(TemperatureUnit::Kelvin), &TomlConfig::default())
            .target_unit,
        TemperatureUnit::Kelvin
    );
}
