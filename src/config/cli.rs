use crate::config::{ServerConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "access-gate")]
#[command(about = "Grants or denies access by comparing a submitted code with a shared secret")]
pub struct CliConfig {
    #[arg(long, env = "DEMO_ACCESS_CODE", hide_env_values = true)]
    pub access_code: Option<String>,

    #[arg(long, env = "ACCESS_GATE_BIND", help = "Address to listen on [default: 0.0.0.0:3000]")]
    pub bind: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn into_server_config(self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        Ok(ServerConfig::resolve(
            self.access_code,
            self.bind,
            file.as_ref(),
        ))
    }
}
