use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
}

pub async fn health_check(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "uptimeSecs": state.uptime_secs(),
        "engine": {
            "ready": true,
        }
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

// The engine needs no warm-up or external resources, so readiness is
// equivalent to liveness.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}
