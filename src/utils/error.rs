use thiserror::Error;

/// Failures of the conversion engine itself. Both are user-facing and recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Please select two different units")]
    SameUnit,
}

impl ValidationError {
    /// Stable reason code, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidNumber => "invalid_number",
            ValidationError::SameUnit => "same_unit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    System,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown temperature unit: '{value}'")]
    UnknownUnit { value: String },

    #[error("Unknown output format: '{value}'")]
    UnknownFormat { value: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::Validation(_) => ErrorCategory::Validation,
            ConvertError::UnknownUnit { .. }
            | ConvertError::UnknownFormat { .. }
            | ConvertError::InvalidConfigValue { .. }
            | ConvertError::ConfigParse(_) => ErrorCategory::Configuration,
            ConvertError::Io(_) | ConvertError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::Validation(e) => e.to_string(),
            ConvertError::UnknownUnit { value } => {
                format!("'{}' is not a temperature unit", value)
            }
            ConvertError::UnknownFormat { value } => {
                format!("'{}' is not an output format", value)
            }
            ConvertError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ConvertError::ConfigParse(_) => "The configuration file is not valid TOML".to_string(),
            ConvertError::Io(e) => format!("Could not read input: {}", e),
            ConvertError::Serialization(_) => "Could not serialize the result".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::Validation(ValidationError::InvalidNumber) => {
                "Pass a plain decimal number such as 21.5 or -40"
            }
            ConvertError::Validation(ValidationError::SameUnit) => {
                "Choose a target unit that differs from the source unit"
            }
            ConvertError::UnknownUnit { .. } => "Use one of: c, f, k (or celsius, fahrenheit, kelvin)",
            ConvertError::UnknownFormat { .. } => "Use one of: text, json",
            ConvertError::InvalidConfigValue { .. } | ConvertError::ConfigParse(_) => {
                "Check the configuration file against the documented keys"
            }
            ConvertError::Io(_) => "Make sure the file exists and is readable",
            ConvertError::Serialization(_) => "Retry with --format text",
        }
    }

    /// Process exit code for the CLI: 2 for validation failures, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Configuration | ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
