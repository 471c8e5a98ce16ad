//! `wallgrab extract <page>` – list a page's image URLs.

use anyhow::Result;
use wallgrab_core::config::WallgrabConfig;
use wallgrab_core::scrape;

pub fn run_extract(cfg: &WallgrabConfig, page_url: &str) -> Result<()> {
    let target = scrape::normalize_page_url(page_url)?;
    for url in scrape::scrape_page(&cfg.fetcher(), &target)? {
        println!("{}", url);
    }
    Ok(())
}
