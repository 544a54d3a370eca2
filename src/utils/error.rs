use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Access code is required")]
    MissingInput,

    #[error("Invalid access code")]
    Mismatch,

    #[error("Malformed request body: {message}")]
    MalformedRequest { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Server,
    Config,
}

impl GateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GateError::MissingInput | GateError::Mismatch => ErrorCategory::Client,
            GateError::MalformedRequest { .. } => ErrorCategory::Server,
            GateError::IoError(_)
            | GateError::TomlError(_)
            | GateError::ConfigError { .. }
            | GateError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GateError::MissingInput | GateError::Mismatch => self.to_string(),
            GateError::MalformedRequest { .. } => "Internal server error".to_string(),
            GateError::IoError(e) => format!("Could not read configuration file: {}", e),
            GateError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            GateError::ConfigError { message } => message.clone(),
            GateError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

impl From<serde_json::Error> for GateError {
    fn from(e: serde_json::Error) -> Self {
        GateError::MalformedRequest {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GateError>;
