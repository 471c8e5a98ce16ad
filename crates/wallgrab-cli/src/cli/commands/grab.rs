//! `wallgrab grab <page>` – scrape a page and download its images.

use anyhow::Result;
use wallgrab_core::config::WallgrabConfig;
use wallgrab_core::scrape;

pub fn run_grab(
    cfg: &WallgrabConfig,
    page_url: &str,
    out: Option<&str>,
    workers: Option<usize>,
) -> Result<()> {
    let target = scrape::normalize_page_url(page_url)?;
    let fetcher = cfg.fetcher();
    let urls = scrape::scrape_page(&fetcher, &target)?;
    if urls.is_empty() {
        println!("No images found on {}", target.url);
        return Ok(());
    }
    super::download_all(cfg, fetcher, urls, out, workers)
}
