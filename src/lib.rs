pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{LambdaConfig, ServerConfig, TomlConfig};
pub use crate::core::gate::AccessGate;
pub use crate::domain::model::{AccessOutcome, AccessRequest, AccessSecret};
pub use crate::utils::error::{GateError, Result};
