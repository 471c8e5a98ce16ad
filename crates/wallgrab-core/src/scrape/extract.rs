//! Regex extraction of image URLs from page HTML.

use super::Site;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static ZHIHU_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)data-original="(.*?)""#).expect("zhihu regex is valid"));

#[allow(clippy::expect_used)]
static BILIBILI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)img data-src="(.*?)""#).expect("bilibili regex is valid"));

/// Image URLs in `html`, in page order.
///
/// Zhihu lists every image twice in a row, so a URL equal to the previously
/// kept one is dropped. Bilibili uses protocol-relative URLs, which get an
/// `https:` prefix.
pub fn extract_image_urls(site: Site, html: &str) -> Vec<String> {
    let urls = match site {
        Site::Zhihu => {
            let mut urls: Vec<String> = Vec::new();
            for cap in ZHIHU_PATTERN.captures_iter(html) {
                let url = cap[1].trim();
                if urls.last().map(String::as_str) == Some(url) {
                    continue;
                }
                urls.push(url.to_string());
            }
            urls
        }
        Site::Bilibili => BILIBILI_PATTERN
            .captures_iter(html)
            .map(|cap| format!("https:{}", cap[1].trim()))
            .collect(),
    };

    for url in &urls {
        tracing::debug!(%site, url = %url, "adding");
    }
    urls
}
