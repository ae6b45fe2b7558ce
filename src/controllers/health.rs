use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

/// GET / - service descriptor
pub async fn index(State(config): State<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "service": "Agrimater TTS Server",
            "status": "running",
            "provider": "OpenAI",
            "voice": config.tts_voice,
            "endpoints": {
                "health": "/health",
                "tts": "/api/tts (POST)"
            }
        })),
    )
}

/// GET /health - liveness probe, independent of provider availability
pub async fn health(State(config): State<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "TTS Server",
            "provider": "OpenAI",
            "voice": config.tts_voice
        })),
    )
}
