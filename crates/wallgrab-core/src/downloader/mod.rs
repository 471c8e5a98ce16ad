//! Per-item unit of work: name, fetch, write, log.
//!
//! A `Downloader` is shared by every worker of a run. Each call to `process`
//! is fully isolated: whatever goes wrong with one URL is logged and the
//! caller moves on to the next.

mod outcome;

pub use outcome::{DownloadError, Outcome};

use crate::fetch::Fetcher;
use crate::sequencer::FilenameSequencer;
use crate::storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// URLs with this suffix (case-sensitive) are never downloaded.
pub const SKIPPED_SUFFIX: &str = ".png";

/// True if `url` is filtered out of the pipeline.
pub fn is_skipped(url: &str) -> bool {
    url.ends_with(SKIPPED_SUFFIX)
}

#[derive(Debug)]
pub struct Downloader {
    fetcher: Fetcher,
    sequencer: Arc<FilenameSequencer>,
    directory: PathBuf,
}

impl Downloader {
    /// `directory` must already exist; it is not created here.
    pub fn new(fetcher: Fetcher, sequencer: Arc<FilenameSequencer>, directory: PathBuf) -> Self {
        Self {
            fetcher,
            sequencer,
            directory,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Downloads `url` and logs the outcome as `worker`. Never fails.
    pub fn process(&self, worker: &str, url: &str) {
        self.attempt(url).log(worker, url);
    }

    /// Does the work of `process` without logging.
    ///
    /// The filename is taken from the sequencer before the fetch, so a failure
    /// still consumes a number.
    pub fn attempt(&self, url: &str) -> Outcome {
        if is_skipped(url) {
            return Outcome::Skipped;
        }

        let path = self.directory.join(self.sequencer.next());

        let data = match self.fetcher.fetch(url) {
            Ok(data) => data,
            Err(e) => {
                return Outcome::Failed {
                    path,
                    error: e.into(),
                }
            }
        };

        match storage::save_bytes(&data, &path) {
            Ok(()) => Outcome::Saved { path },
            Err(source) => Outcome::Failed {
                error: DownloadError::Storage {
                    path: path.clone(),
                    source,
                },
                path,
            },
        }
    }
}
