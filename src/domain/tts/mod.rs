pub mod artifact;
pub mod error;
pub mod service;

pub use artifact::ScopedAudioFile;
pub use error::TtsServiceError;
pub use service::TtsService;

/// First `max_chars` characters of `text`, for log lines.
///
/// Counts characters rather than bytes so multi-byte input never panics a
/// slice.
pub(crate) fn text_preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
