use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness banner at `/`, kept stable for probes and the web client.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "MediMind Diagnostics API is running" }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "diagnostics-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
