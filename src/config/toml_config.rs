use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::model::TemperatureUnit;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub from: Option<TemperatureUnit>,
    pub to: Option<TemperatureUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replace `${VAR}` with the variable's value; unset variables are left as-is
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::InvalidConfigValue {
            field: "env_substitution".to_string(),
            value: content.to_string(),
            reason: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Check the loaded values for consistency
    pub fn validate_config(&self) -> Result<()> {
        if let Some(defaults) = &self.defaults {
            if let (Some(from), Some(to)) = (defaults.from, defaults.to) {
                if from == to {
                    return Err(ConvertError::InvalidConfigValue {
                        field: "defaults.to".to_string(),
                        value: to.to_string(),
                        reason: "Default target unit must differ from the default source unit"
                            .to_string(),
                    });
                }
            }
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_non_empty_string("logging.level", level)?;
            validate_one_of("logging.level", &level.trim().to_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .map(str::trim)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn default_source_unit(&self) -> Option<TemperatureUnit> {
        self.defaults.as_ref().and_then(|d| d.from)
    }

    fn default_target_unit(&self) -> Option<TemperatureUnit> {
        self.defaults.as_ref().and_then(|d| d.to)
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[defaults]
from = "kelvin"
to = "F"

[output]
format = "json"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.default_source_unit(), Some(TemperatureUnit::Kelvin));
        assert_eq!(config.default_target_unit(), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.default_source_unit(), None);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("THERMO_TEST_TARGET_UNIT", "kelvin");

        let toml_content = r#"
[defaults]
to = "${THERMO_TEST_TARGET_UNIT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_target_unit(), Some(TemperatureUnit::Kelvin));

        std::env::remove_var("THERMO_TEST_TARGET_UNIT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[logging]
level = "${THERMO_TEST_UNSET_LEVEL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("${THERMO_TEST_UNSET_LEVEL}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_unit_fails_to_parse() {
        let result = TomlConfig::from_toml_str("[defaults]\nfrom = \"rankine\"\n");
        assert!(matches!(result, Err(ConvertError::ConfigParse(_))));

        let result = TomlConfig::from_toml_str("[output]\nformat = \"yaml\"\n");
        assert!(matches!(result, Err(ConvertError::ConfigParse(_))));
    }

    #[test]
    fn test_config_validation() {
        let same_units = TomlConfig::from_toml_str("[defaults]\nfrom = \"c\"\nto = \"celsius\"\n").unwrap();
        assert!(same_units.validate().is_err());

        let empty_level = TomlConfig::from_toml_str("[logging]\nlevel = \"  \"\n").unwrap();
        assert!(empty_level.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nfrom = \"fahrenheit\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_source_unit(), Some(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/nonexistent/thermo-convert.toml");
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }
}
