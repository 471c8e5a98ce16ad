//! Blocking HTTP GET of a whole resource into memory.
//!
//! Uses the curl crate (libcurl). One `Easy` handle per request, so a shared
//! `Fetcher` can be used from any number of worker threads at once.

mod error;

pub use error::{check_status, FetchError};

use std::collections::HashMap;
use std::time::Duration;

/// User-Agent sent when none is configured. Some image hosts reject requests without one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36";

/// Deadlines and redirect policy for every request made by a `Fetcher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` lets a transfer run as long as the server keeps it open.
    pub timeout: Option<Duration>,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
            max_redirections: 10,
        }
    }
}

/// Header map containing only the given User-Agent.
pub fn default_headers(user_agent: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), user_agent.to_string());
    headers
}

/// GETs URLs with a fixed header set.
#[derive(Debug, Clone)]
pub struct Fetcher {
    headers: HashMap<String, String>,
    options: FetchOptions,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(default_headers(DEFAULT_USER_AGENT), FetchOptions::default())
    }
}

impl Fetcher {
    pub fn new(headers: HashMap<String, String>, options: FetchOptions) -> Self {
        Self { headers, options }
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Performs a single GET and returns the full body.
    ///
    /// Follows redirects. No retry; a non-2xx final status is `FetchError::Http`.
    /// Runs in the current thread.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(FetchError::Setup)?;
        easy.get(true).map_err(FetchError::Setup)?;
        easy.follow_location(true).map_err(FetchError::Setup)?;
        easy.max_redirections(self.options.max_redirections)
            .map_err(FetchError::Setup)?;
        easy.connect_timeout(self.options.connect_timeout)
            .map_err(FetchError::Setup)?;
        if let Some(timeout) = self.options.timeout {
            easy.timeout(timeout).map_err(FetchError::Setup)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in &self.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))
                .map_err(FetchError::Setup)?;
        }
        if !self.headers.is_empty() {
            easy.http_headers(list).map_err(FetchError::Setup)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(FetchError::Setup)?;
            transfer.perform().map_err(FetchError::from_transfer)?;
        }

        let status = easy.response_code().map_err(FetchError::Network)?;
        check_status(status)?;

        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
