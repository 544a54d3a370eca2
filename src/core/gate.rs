use crate::core::ConfigProvider;
use crate::domain::model::{AccessOutcome, AccessRequest, AccessSecret};
use crate::utils::error::{GateError, Result};
use serde_json::Value;

/// Compares a submitted access code with the configured secret.
///
/// The gate holds no mutable state; one instance is shared across all
/// requests.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: AccessSecret,
}

impl AccessGate {
    pub fn new(secret: AccessSecret) -> Self {
        Self { secret }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.access_secret())
    }

    /// Parses a raw body into an [`AccessRequest`].
    ///
    /// Anything other than a JSON object is rejected as malformed.
    pub fn parse(raw_body: &[u8]) -> Result<AccessRequest> {
        let value: Value = serde_json::from_slice(raw_body)?;
        if !value.is_object() {
            return Err(GateError::MalformedRequest {
                message: format!("expected a JSON object, got {}", json_kind(&value)),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn verify(&self, request: &AccessRequest) -> Result<()> {
        let candidate = request.candidate().ok_or(GateError::MissingInput)?;

        // Non-string codes can never equal the secret.
        match candidate {
            Value::String(code) if self.secret.matches(code) => Ok(()),
            _ => Err(GateError::Mismatch),
        }
    }

    pub fn handle(&self, raw_body: &[u8]) -> AccessOutcome {
        let result = Self::parse(raw_body).and_then(|request| self.verify(&request));

        match result {
            Ok(()) => {
                tracing::debug!("Access granted");
                AccessOutcome::Granted
            }
            Err(e) => {
                let outcome = AccessOutcome::from(&e);
                match outcome {
                    AccessOutcome::InternalError => {
                        tracing::error!("Access check failed: {}", e)
                    }
                    AccessOutcome::Denied => tracing::debug!("Access denied"),
                    _ => {}
                }
                outcome
            }
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(AccessSecret::default())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
