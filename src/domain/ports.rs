use crate::core::render::OutputFormat;
use crate::domain::model::TemperatureUnit;

/// Source of the defaults used when a unit or format is not given explicitly.
pub trait ConfigProvider: Send + Sync {
    fn default_source_unit(&self) -> Option<TemperatureUnit>;
    fn default_target_unit(&self) -> Option<TemperatureUnit>;
    fn output_format(&self) -> Option<OutputFormat>;
}
