#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_socket_addr, Validate};
use std::net::SocketAddr;

pub const ACCESS_CODE_ENV: &str = "DEMO_ACCESS_CODE";
pub const BIND_ENV: &str = "ACCESS_GATE_BIND";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Fully resolved settings for the HTTP server binary.
#[derive(Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub access_code: Option<String>,
}

impl ServerConfig {
    /// Explicit values win over the file; the file wins over built-in defaults.
    /// Empty strings count as unset.
    pub fn resolve(
        access_code: Option<String>,
        bind: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let access_code = non_empty(access_code)
            .or_else(|| non_empty(file.and_then(|f| f.access_code()).map(str::to_string)));
        let bind = non_empty(bind)
            .or_else(|| non_empty(file.and_then(|f| f.bind()).map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        Self { bind, access_code }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("bind", &self.bind)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl ConfigProvider for ServerConfig {
    fn access_code(&self) -> Option<&str> {
        self.access_code.as_deref()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if let Some(code) = &self.access_code {
            // Legal, but easy to set by accident. Never log the value.
            if validate_non_empty_string("access_code", code).is_err() {
                tracing::warn!("Configured access code is whitespace-only");
            }
        }

        tracing::debug!("Server configuration validation passed");
        Ok(())
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
