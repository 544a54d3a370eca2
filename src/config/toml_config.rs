use crate::core::ConfigProvider;
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub gate: Option<GateSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Clone, Default, Deserialize)]
pub struct GateSection {
    pub access_code: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn bind(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.bind.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn access_code(&self) -> Option<&str> {
        self.gate.as_ref().and_then(|g| g.access_code.as_deref())
    }
}
