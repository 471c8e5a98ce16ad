//! CLI command handlers, one file per subcommand.

mod extract;
mod grab;
mod save;

pub use extract::run_extract;
pub use grab::run_grab;
pub use save::run_save;

use anyhow::{Context, Result};
use std::path::Path;
use wallgrab_core::config::WallgrabConfig;
use wallgrab_core::fetch::Fetcher;
use wallgrab_core::pipeline::{filter_urls, Pipeline};
use wallgrab_core::storage;

/// Prepares the output directory and runs the pipeline over `urls`.
fn download_all(
    cfg: &WallgrabConfig,
    fetcher: Fetcher,
    urls: Vec<String>,
    out: Option<&str>,
    workers: Option<usize>,
) -> Result<()> {
    let dir = storage::ensure_dir(out.unwrap_or("."))?;
    let workers = workers.unwrap_or(cfg.default_workers);
    let pipeline = Pipeline::new(fetcher, dir, workers).context("invalid pipeline settings")?;

    let urls = filter_urls(urls);
    println!("{}", plan_message(urls.len(), pipeline.directory()));
    pipeline.execute(urls);
    println!("done");
    Ok(())
}

fn plan_message(count: usize, dir: &Path) -> String {
    format!("downloading {} image(s) to {}", count, dir.display())
}
