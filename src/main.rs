use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::response::IntoResponse;
use facemetrics::config::Config;
use facemetrics::logging::{init_tracing, LogConfig};
use facemetrics::response::AppError;
use facemetrics::routes::build_router;
use facemetrics::state::AppState;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&LogConfig {
        log_level: config.log_level.clone(),
        enable_file_logs: config.enable_file_logs,
        log_dir: config.log_dir.clone(),
    });
    tracing::info!("Starting facemetrics");

    let cors = if config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin = config
            .cors_origin
            .parse::<HeaderValue>()
            .expect("CORS_ORIGIN is not a valid header value");
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = AppState::new(&config);
    let app = build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(
            |_err: Box<dyn std::any::Any + Send + 'static>| {
                AppError::internal("Unhandled panic in request handler").into_response()
            },
        ));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
