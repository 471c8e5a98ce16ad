//! Disk side of the pipeline: preparing the target directory and writing image files.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes `data` to `path`, creating or truncating it. The file is closed on every exit path.
/// Parent directories are not created.
pub fn save_bytes(data: &[u8], path: &Path) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data)?;
    file.flush()
}

/// Creates `path` and any missing parents. Surrounding whitespace in the path is ignored.
/// Returns the trimmed path. Fails if the path is empty or names an existing non-directory.
pub fn ensure_dir(path: &str) -> Result<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        anyhow::bail!("target directory path is empty");
    }
    let dir = PathBuf::from(trimmed);
    if dir.exists() && !dir.is_dir() {
        anyhow::bail!("{} exists and is not a directory", dir.display());
    }
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    Ok(dir)
}
