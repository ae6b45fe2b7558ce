use async_trait::async_trait;
use std::path::Path;

/// Error from a synthesis provider call.
///
/// `kind` is a coarse classification (API error, connection failure, ...)
/// surfaced to clients alongside the message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TtsProviderError {
    pub kind: String,
    pub message: String,
}

impl TtsProviderError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (OpenAI, ElevenLabs, etc.)
///
/// Implementations are responsible for:
/// - Mapping the voice identifier onto provider-specific voice selection
/// - Writing the synthesized audio into the requested path
/// - Classifying provider failures into a `TtsProviderError`
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with the given voice, writing the audio into
    /// `output_path`.
    ///
    /// The provider emits a compressed audio container (MP3); this relay
    /// treats the content as opaque bytes.
    ///
    /// # Errors
    /// Returns a classified error if the provider call fails or the audio
    /// cannot be written to `output_path`.
    async fn synthesize_to_file(
        &self,
        text: &str,
        voice: &str,
        output_path: &Path,
    ) -> Result<(), TtsProviderError>;
}
