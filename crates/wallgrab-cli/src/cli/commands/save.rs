//! `wallgrab save <url>...` – download explicit image URLs.

use anyhow::{Context, Result};
use std::path::Path;
use wallgrab_core::config::WallgrabConfig;

pub fn run_save(
    cfg: &WallgrabConfig,
    mut urls: Vec<String>,
    from_file: Option<&Path>,
    out: Option<&str>,
    workers: Option<usize>,
) -> Result<()> {
    if let Some(path) = from_file {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read URL list {}", path.display()))?;
        urls.extend(parse_url_list(&data));
    }
    if urls.is_empty() {
        anyhow::bail!("no URLs given");
    }
    super::download_all(cfg, cfg.fetcher(), urls, out, workers)
}

/// One URL per line; blank lines and lines starting with `#` are ignored.
fn parse_url_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
