//! Page scraping: turn a user-supplied page URL into the list of image URLs
//! the pipeline consumes.
//!
//! Only two sites are understood, each by a fixed regex over the raw HTML.

mod extract;
mod site;

pub use extract::extract_image_urls;
pub use site::Site;

use crate::fetch::{FetchError, Fetcher};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unsupported site (expected zhihu.com or bilibili.com): {0}")]
    UnsupportedSite(String),
    #[error("invalid page URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] FetchError),
    #[error("page is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// A validated page URL and the site it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    pub site: Site,
    pub url: String,
}

/// Trims `input`, adds `https://` when no http(s) scheme is present, and detects the site.
pub fn normalize_page_url(input: &str) -> Result<PageTarget, ScrapeError> {
    let trimmed = input.trim();
    let url = if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let site = Site::detect(&url).ok_or_else(|| ScrapeError::UnsupportedSite(url.clone()))?;
    if let Err(source) = url::Url::parse(&url) {
        return Err(ScrapeError::InvalidUrl { url, source });
    }
    Ok(PageTarget { site, url })
}

/// GETs the page with `fetcher` and extracts its image URLs.
pub fn scrape_page(fetcher: &Fetcher, target: &PageTarget) -> Result<Vec<String>, ScrapeError> {
    let body = fetcher.fetch(&target.url)?;
    let html = String::from_utf8(body)?;
    let urls = extract_image_urls(target.site, &html);
    tracing::info!(site = %target.site, page = %target.url, images = urls.len(), "scraped page");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_https_and_detects_zhihu() {
        let t = normalize_page_url("  www.zhihu.com/question/123  ").unwrap();
        assert_eq!(t.site, Site::Zhihu);
        assert_eq!(t.url, "https://www.zhihu.com/question/123");
    }

    #[test]
    fn keeps_http_and_detects_bilibili() {
        let t = normalize_page_url("http://www.bilibili.com/read/cv1").unwrap();
        assert_eq!(t.site, Site::Bilibili);
        assert_eq!(t.url, "http://www.bilibili.com/read/cv1");
    }

    #[test]
    fn rejects_other_sites() {
        assert!(matches!(
            normalize_page_url("example.com/gallery"),
            Err(ScrapeError::UnsupportedSite(_))
        ));
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            normalize_page_url("https://zhihu.com:99999/x"),
            Err(ScrapeError::InvalidUrl { .. })
        ));
    }
}
