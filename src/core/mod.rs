pub mod engine;
pub mod render;
pub mod rounding;

pub use crate::domain::model::{Conversion, ConversionRequest, TemperatureUnit};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{Result, ValidationError};
