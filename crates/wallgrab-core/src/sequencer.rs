//! Shared, monotonically increasing filename source.
//!
//! Every worker in a run holds the same `Arc<FilenameSequencer>`; each call to
//! `next` hands out a fresh `<n>.jpg` name. Names are issued before the
//! download outcome is known, so a failed item leaves a gap in the numbering.

use std::sync::Mutex;

/// Extension appended to every issued filename.
pub const FILE_EXTENSION: &str = "jpg";

/// Issues `1.jpg`, `2.jpg`, ... to any number of concurrent callers.
#[derive(Debug)]
pub struct FilenameSequencer {
    counter: Mutex<u64>,
}

impl Default for FilenameSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameSequencer {
    /// Sequencer whose first issued name is `1.jpg`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Mutex::new(first),
        }
    }

    /// Returns the next unused filename. The lock is held only for read, format and increment.
    pub fn next(&self) -> String {
        let mut counter = self.counter.lock().unwrap_or_else(|e| e.into_inner());
        let name = format!("{}.{}", *counter, FILE_EXTENSION);
        *counter += 1;
        name
    }

    /// Value the next call to `next` will use.
    pub fn peek(&self) -> u64 {
        *self.counter.lock().unwrap_or_else(|e| e.into_inner())
    }
}
