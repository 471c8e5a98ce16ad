//! Entry point of the core: filter, size the pool, run it, wait.

use crate::downloader::{is_skipped, Downloader};
use crate::fetch::Fetcher;
use crate::pool::WorkerPool;
use crate::sequencer::FilenameSequencer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Batches of this many filtered URLs or fewer always run on a single worker.
pub const SMALL_BATCH_LIMIT: usize = 10;

/// Invalid arguments to `Pipeline::new`. Runtime I/O failures never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),
    #[error("target directory must not be empty")]
    EmptyDirectory,
}

/// Worker count actually used for `filtered` URLs when `requested` were asked for.
pub fn effective_worker_count(filtered: usize, requested: usize) -> usize {
    if filtered <= SMALL_BATCH_LIMIT {
        1
    } else {
        requested.max(1)
    }
}

/// Drops skipped (`.png`) URLs, keeping order.
pub fn filter_urls<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    urls.into_iter()
        .map(Into::into)
        .filter(|u| !is_skipped(u))
        .collect()
}

/// One run of the fetch-and-save pipeline into a single directory.
///
/// Owns the run's `FilenameSequencer`; calling `execute` twice on the same
/// pipeline continues the numbering.
#[derive(Debug)]
pub struct Pipeline {
    pool: WorkerPool,
    sequencer: Arc<FilenameSequencer>,
    requested_workers: usize,
}

impl Pipeline {
    /// `directory` must already exist (see `storage::ensure_dir`).
    pub fn new(
        fetcher: Fetcher,
        directory: impl Into<PathBuf>,
        requested_workers: usize,
    ) -> Result<Self, PipelineError> {
        if requested_workers == 0 {
            return Err(PipelineError::InvalidWorkerCount(requested_workers));
        }
        let directory = directory.into();
        if directory.as_os_str().is_empty() {
            return Err(PipelineError::EmptyDirectory);
        }

        let sequencer = Arc::new(FilenameSequencer::new());
        let downloader = Downloader::new(fetcher, Arc::clone(&sequencer), directory);
        Ok(Self {
            pool: WorkerPool::new(Arc::new(downloader)),
            sequencer,
            requested_workers,
        })
    }

    pub fn directory(&self) -> &Path {
        self.pool.downloader().directory()
    }

    pub fn sequencer(&self) -> &Arc<FilenameSequencer> {
        &self.sequencer
    }

    /// Downloads every non-skipped URL. Blocks until all workers are done.
    /// Per-item failures are logged, never returned.
    pub fn execute<I, S>(&self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls = filter_urls(urls);
        let workers = effective_worker_count(urls.len(), self.requested_workers);
        tracing::info!(
            urls = urls.len(),
            requested = self.requested_workers,
            workers,
            dir = %self.directory().display(),
            "starting downloads"
        );

        self.pool.run(urls, workers);

        tracing::info!(next_file = self.sequencer.peek(), "all workers finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_batches_use_one_worker() {
        for n in 0..=SMALL_BATCH_LIMIT {
            assert_eq!(effective_worker_count(n, 8), 1);
        }
        assert_eq!(effective_worker_count(11, 8), 8);
        assert_eq!(effective_worker_count(23, 4), 4);
        assert_eq!(effective_worker_count(11, 0), 1);
    }

    #[test]
    fn filter_drops_png_only() {
        let got = filter_urls([
            "https://a.com/1.jpg",
            "https://a.com/2.png",
            "https://a.com/3.jpg",
            "https://a.com/4.PNG",
        ]);
        assert_eq!(
            got,
            vec![
                "https://a.com/1.jpg".to_string(),
                "https://a.com/3.jpg".to_string(),
                "https://a.com/4.PNG".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Pipeline::new(Fetcher::default(), "/tmp", 0).unwrap_err();
        assert_eq!(err, PipelineError::InvalidWorkerCount(0));
    }

    #[test]
    fn rejects_empty_directory() {
        let err = Pipeline::new(Fetcher::default(), "", 2).unwrap_err();
        assert_eq!(err, PipelineError::EmptyDirectory);
    }

    #[test]
    fn empty_input_returns_without_issuing_names() {
        let dir = tempfile::tempdir().unwrap();
        let p = Pipeline::new(Fetcher::default(), dir.path(), 3).unwrap();
        p.execute(Vec::<String>::new());
        p.execute(["https://a.com/only.png"]);
        assert_eq!(p.sequencer().peek(), 1);
    }
}
