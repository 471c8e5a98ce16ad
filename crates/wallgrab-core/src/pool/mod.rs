//! Fixed-size pool of OS threads, one per shard.
//!
//! All workers are started before any is joined. Each worker walks its shard
//! sequentially through the shared `Downloader`; there is no result channel,
//! outcomes go to the log.

mod partition;

pub use partition::{partition, shard_size};

use crate::downloader::Downloader;
use std::io;
use std::sync::Arc;

/// Log name of the worker handling shard `index` (0-based): `WORKER-1`, `WORKER-2`, ...
pub fn worker_id(index: usize) -> String {
    format!("WORKER-{}", index + 1)
}

#[derive(Debug, Clone)]
pub struct WorkerPool {
    downloader: Arc<Downloader>,
}

impl WorkerPool {
    pub fn new(downloader: Arc<Downloader>) -> Self {
        Self { downloader }
    }

    pub fn downloader(&self) -> &Arc<Downloader> {
        &self.downloader
    }

    /// Processes every URL using `workers` threads and returns once all of them have finished.
    pub fn run(&self, urls: Vec<String>, workers: usize) {
        let shards = partition(urls, workers);
        let downloader: &Downloader = &self.downloader;

        std::thread::scope(|s| {
            let (handles, unstarted) = start_all(&shards, |index, shard| {
                let id = worker_id(index);
                std::thread::Builder::new()
                    .name(id.clone())
                    .spawn_scoped(s, move || run_shard(downloader, &id, shard))
            });

            // Thread limit hit: run the leftover shards here, after every other worker is going.
            for (index, shard) in unstarted {
                run_shard(downloader, &worker_id(index), shard);
            }

            for (id, handle) in handles {
                if handle.join().is_err() {
                    tracing::error!(worker = %id, "worker panicked");
                }
            }
        });
    }
}

/// Calls `spawn` for every shard before anything runs on the caller's thread.
/// Returns the started handles (with worker ids) and the shards whose spawn failed.
fn start_all<'a, H>(
    shards: &'a [Vec<String>],
    mut spawn: impl FnMut(usize, &'a [String]) -> io::Result<H>,
) -> (Vec<(String, H)>, Vec<(usize, &'a [String])>) {
    let mut handles = Vec::with_capacity(shards.len());
    let mut unstarted = Vec::new();
    for (index, shard) in shards.iter().enumerate() {
        match spawn(index, shard) {
            Ok(handle) => handles.push((worker_id(index), handle)),
            Err(e) => {
                tracing::warn!(worker = %worker_id(index), error = %e, "could not spawn worker, deferring shard");
                unstarted.push((index, shard.as_slice()));
            }
        }
    }
    (handles, unstarted)
}

fn run_shard(downloader: &Downloader, id: &str, shard: &[String]) {
    tracing::debug!(worker = id, urls = shard.len(), "worker started");
    for url in shard {
        downloader.process(id, url);
    }
    tracing::debug!(worker = id, "worker finished");
}
