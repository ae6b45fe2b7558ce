use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::tts::{text_preview, TtsService},
    error::{AppError, AppResult},
};

/// Request for POST /api/tts
///
/// `text` is optional at the deserialization level so that a missing or
/// `null` field reaches the emptiness check and answers "Text is required"
/// instead of a generic deserialization error.
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<TtsRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Validate input
        let Json(request) =
            payload.map_err(|_| AppError::InvalidRequest("Invalid JSON".to_string()))?;

        let text = request.text.unwrap_or_default();
        if text.is_empty() {
            return Err(AppError::InvalidRequest("Text is required".to_string()));
        }

        tracing::info!(
            text_length = text.len(),
            text_preview = %text_preview(&text, 50),
            "Received TTS request"
        );

        // Synthesize speech using the service; errors map once at the boundary
        let audio = controller
            .tts_service
            .synthesize(&text)
            .await
            .map_err(AppError::from)?;

        // Raw audio response, playable inline rather than a download
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("inline; filename=\"speech.mp3\""),
        );

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }
}
