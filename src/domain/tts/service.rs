use super::artifact::ScopedAudioFile;
use super::error::TtsServiceError;
use crate::infrastructure::repositories::TtsRepository;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates one synthesis request: stage a scoped temporary file, hand it
/// to the provider, verify the output, read it back and clean up.
pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    voice: String,
    temp_dir: PathBuf,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, voice: String, temp_dir: PathBuf) -> Self {
        Self {
            tts_repo,
            voice,
            temp_dir,
        }
    }

    /// Synthesize `text` into audio bytes via the configured provider.
    ///
    /// The provider writes into a scoped temporary file which is removed on
    /// every exit path; only the in-memory bytes leave this function.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsServiceError> {
        let started = Instant::now();
        let artifact = ScopedAudioFile::allocate(&self.temp_dir);

        tracing::info!(
            voice = %self.voice,
            text_length = text.len(),
            output_path = %artifact.path().display(),
            "Starting TTS synthesis"
        );

        // 1. Provider writes the audio into the staged path
        self.tts_repo
            .synthesize_to_file(text, &self.voice, artifact.path())
            .await
            .map_err(|e| TtsServiceError::Provider {
                kind: e.kind,
                message: e.message,
            })?;

        // 2. Verify the artifact materialized
        let audio_size = match tokio::fs::metadata(artifact.path()).await {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::error!(
                    output_path = %artifact.path().display(),
                    "Provider reported success but produced no audio file"
                );
                return Err(TtsServiceError::MissingArtifact);
            }
            Err(e) => return Err(e.into()),
        };

        // 3. Verify it has content
        if audio_size == 0 {
            tracing::error!(
                output_path = %artifact.path().display(),
                "Generated audio file is empty"
            );
            return Err(TtsServiceError::EmptyArtifact);
        }

        // 4. Read into memory; 5. release the staged file
        let audio = tokio::fs::read(artifact.path()).await?;
        artifact.release().await;

        tracing::info!(
            voice = %self.voice,
            latency_ms = started.elapsed().as_millis() as u64,
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
