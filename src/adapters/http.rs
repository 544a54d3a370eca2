//! HTTP surface for the access gate.
//!
//! - `POST /api/verify-access` - check an access code
//! - `GET /health` - liveness probe

use crate::core::gate::AccessGate;
use crate::domain::model::AccessOutcome;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const VERIFY_ACCESS_PATH: &str = "/api/verify-access";
pub const HEALTH_PATH: &str = "/health";

pub fn router(gate: Arc<AccessGate>) -> Router {
    Router::new()
        .route(VERIFY_ACCESS_PATH, post(verify_access))
        .route(HEALTH_PATH, get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(gate)
}

// Raw bytes rather than `Json<_>`: the gate decides what a malformed body means.
// A body that cannot be read at all (over the size limit, broken stream) is
// answered with the same JSON 500 as an unparseable one.
async fn verify_access(
    State(gate): State<Arc<AccessGate>>,
    body: Result<Bytes, BytesRejection>,
) -> AccessOutcome {
    match body {
        Ok(body) => gate.handle(&body),
        Err(rejection) => {
            tracing::error!(
                "Access check failed: unreadable request body: {}",
                rejection.body_text()
            );
            AccessOutcome::InternalError
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

impl IntoResponse for AccessOutcome {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}
