use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

/// Assemble the application router.
///
/// Kept separate from `start_http_server` so tests can drive the full
/// middleware stack without binding a socket.
pub fn build_router(config: Arc<Config>, tts_controller: Arc<TtsController>) -> Router {
    // TTS route (public, like everything else on this relay)
    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    // Service metadata and liveness routes
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .with_state(config)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    let app = build_router(config, tts_controller);

    axum::serve(listener, app).await?;

    Ok(())
}
