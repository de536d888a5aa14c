// Domain layer: temperature units, requests and results, plus the config port.

pub mod model;
pub mod ports;
