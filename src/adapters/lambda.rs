use crate::core::gate::AccessGate;
use crate::domain::model::AccessOutcome;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The subset of an API Gateway proxy event the gate reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn handle_proxy(gate: &AccessGate, request: &ProxyRequest) -> ProxyResponse {
    let raw = request.body.as_deref().unwrap_or_default();

    let outcome = if request.is_base64_encoded {
        match STANDARD.decode(raw) {
            Ok(decoded) => gate.handle(&decoded),
            Err(e) => {
                tracing::error!("Access check failed: body is not valid base64: {}", e);
                AccessOutcome::InternalError
            }
        }
    } else {
        gate.handle(raw.as_bytes())
    };

    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());

    ProxyResponse {
        status_code: outcome.status_code(),
        headers,
        body: outcome.body().to_string(),
    }
}
