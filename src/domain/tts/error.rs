use crate::error::AppError;

/// Failures of the synthesis workflow, before they are mapped to HTTP at the
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    /// The provider reported success but never materialized the audio file.
    #[error("Failed to generate audio file")]
    MissingArtifact,

    /// The provider materialized a zero-byte audio file.
    #[error("Generated audio file is empty")]
    EmptyArtifact,

    /// The provider call itself failed.
    #[error("{message}")]
    Provider { kind: String, message: String },

    /// A filesystem operation around the staged artifact failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::MissingArtifact => AppError::GenerationFailure,
            TtsServiceError::EmptyArtifact => AppError::EmptyResult,
            TtsServiceError::Provider { kind, message } => AppError::Provider { kind, message },
            TtsServiceError::Io(e) => AppError::Provider {
                kind: format!("{:?}", e.kind()),
                message: e.to_string(),
            },
        }
    }
}
