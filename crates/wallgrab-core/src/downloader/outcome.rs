//! Per-item result of a download, used only for log attribution.

use crate::fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Why an item that was assigned a filename did not end up on disk.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub fn kind(&self) -> &'static str {
        match self {
            DownloadError::Fetch(e) => e.kind(),
            DownloadError::Storage { .. } => "storage",
        }
    }
}

/// What happened to one URL.
#[derive(Debug)]
pub enum Outcome {
    /// Filtered out before a filename was issued. Produces no log line.
    Skipped,
    Saved { path: PathBuf },
    /// `path` is the filename that was consumed; it is never reused.
    Failed { path: PathBuf, error: DownloadError },
}

impl Outcome {
    /// Emits the single log line for this item, attributed to `worker`.
    pub fn log(&self, worker: &str, url: &str) {
        match self {
            Outcome::Skipped => {}
            Outcome::Saved { path } => {
                tracing::info!(
                    worker,
                    url,
                    path = %path.display(),
                    "{}: wrote {} to {}",
                    worker,
                    url,
                    path.display()
                );
            }
            Outcome::Failed { path, error } => {
                tracing::warn!(
                    worker,
                    url,
                    path = %path.display(),
                    kind = error.kind(),
                    error = %error,
                    "{}: error saving {}, continuing",
                    worker,
                    url
                );
            }
        }
    }
}
