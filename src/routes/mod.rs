pub mod analyze;
pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::middleware::request_id;
use crate::response::AppError;
use crate::state::AppState;

/// Maximum request body size: 256 KiB. A 68-point landmark payload is a
/// few kilobytes; anything near the limit is not a legitimate request.
const MAX_BODY_SIZE: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/analyze", analyze::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health::router())
        .fallback(fallback_404)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}

// Unknown routes get the same JSON error envelope as every other failure.
async fn fallback_404() -> AppError {
    AppError::not_found("Not found")
}
