use crate::utils::error::GateError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

pub const DEFAULT_ACCESS_CODE: &str = "demo2024";

/// Candidate code submitted by a client. Lives for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    #[serde(default)]
    pub access_code: Option<Value>,
}

impl AccessRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            access_code: Some(Value::String(code.into())),
        }
    }

    /// `None` when the field is absent, null or an empty string.
    pub fn candidate(&self) -> Option<&Value> {
        match &self.access_code {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(v) => Some(v),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AccessSecret(String);

impl AccessSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccessSecret {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODE)
    }
}

// Keep the secret out of logs and panics.
impl fmt::Debug for AccessSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessSecret(****)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    MissingCode,
    Granted,
    Denied,
    InternalError,
}

impl AccessOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            AccessOutcome::MissingCode => 400,
            AccessOutcome::Granted => 200,
            AccessOutcome::Denied => 401,
            AccessOutcome::InternalError => 500,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            AccessOutcome::MissingCode => json!({ "error": "Access code is required" }),
            AccessOutcome::Granted => json!({ "message": "Access granted", "accessGranted": true }),
            AccessOutcome::Denied => {
                json!({ "error": "Invalid access code", "accessGranted": false })
            }
            AccessOutcome::InternalError => json!({ "error": "Internal server error" }),
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AccessOutcome::Granted)
    }
}

/// Every request-path error maps to exactly one outcome.
impl From<&GateError> for AccessOutcome {
    fn from(e: &GateError) -> Self {
        match e {
            GateError::MissingInput => AccessOutcome::MissingCode,
            GateError::Mismatch => AccessOutcome::Denied,
            _ => AccessOutcome::InternalError,
        }
    }
}
