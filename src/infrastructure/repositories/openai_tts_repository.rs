use super::tts_repository::{TtsProviderError, TtsRepository};
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// OpenAI TTS implementation of the TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Parse the configured model string to the SpeechModel enum
    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    /// Parse a voice string to the Voice enum
    fn parse_voice(voice: &str) -> Voice {
        match voice.to_lowercase().as_str() {
            "alloy" => Voice::Alloy,
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Nova, // Default fallback
        }
    }

    /// Coarse classification of an OpenAI SDK failure, surfaced to clients as
    /// the `type` field of an error response.
    fn classify(err: &OpenAIError) -> &'static str {
        match err {
            OpenAIError::ApiError(_) => "ApiError",
            OpenAIError::Reqwest(_) => "ConnectionError",
            OpenAIError::InvalidArgument(_) => "InvalidArgument",
            OpenAIError::JSONDeserialize(_) => "DecodeError",
            _ => "ProviderError",
        }
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize_to_file(
        &self,
        text: &str,
        voice: &str,
        output_path: &Path,
    ) -> Result<(), TtsProviderError> {
        tracing::info!(
            model = %self.model,
            voice = voice,
            text_length = text.len(),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice: Self::parse_voice(voice),
            response_format: None, // Defaults to MP3
            speed: None,           // Defaults to 1.0
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                voice = voice,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            TtsProviderError::new(Self::classify(&e), format!("OpenAI TTS error: {}", e))
        })?;

        let audio_size = response.bytes.len();

        response.save(output_path).await.map_err(|e| {
            tracing::error!(
                error = %e,
                output_path = %output_path.display(),
                "Failed to write OpenAI TTS audio to staging file"
            );
            TtsProviderError::new(Self::classify(&e), e.to_string())
        })?;

        tracing::debug!(
            audio_size = audio_size,
            output_path = %output_path.display(),
            "OpenAI TTS audio received and staged"
        );

        Ok(())
    }
}
