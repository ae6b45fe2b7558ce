use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A request-scoped temporary file for staging provider audio output.
///
/// Allocating the guard reserves a unique path; the backing file is removed
/// when the guard is dropped, so early returns in the synthesis flow cannot
/// leave artifacts behind. `release` removes the file eagerly on the success
/// path, with failures logged rather than propagated.
pub struct ScopedAudioFile {
    path: PathBuf,
    armed: bool,
}

impl ScopedAudioFile {
    /// Reserve a unique staging path under `dir` for one synthesis request.
    ///
    /// The name keeps the `tts_<pid>_<millis>` shape for operational
    /// familiarity and appends a random suffix so concurrent requests in the
    /// same process cannot collide.
    pub fn allocate(dir: &Path) -> Self {
        let file_name = format!(
            "tts_{}_{}_{}.mp3",
            std::process::id(),
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );

        Self {
            path: dir.join(file_name),
            armed: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the backing file now, consuming the guard.
    ///
    /// Deletion failures are logged, never returned: by this point the audio
    /// has been read into memory and the response must not fail over cleanup.
    pub async fn release(mut self) {
        self.armed = false;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Removed temporary audio file")
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove temporary audio file"
            ),
        }
    }
}

impl Drop for ScopedAudioFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temporary audio file"
                );
            }
        }
    }
}
