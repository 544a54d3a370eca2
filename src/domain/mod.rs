// Domain layer: request/secret/outcome models and the config port.

pub mod model;
pub mod ports;
