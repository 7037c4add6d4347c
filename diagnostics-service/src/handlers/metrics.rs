use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// `GET /metrics`: current metrics in Prometheus text format.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}
