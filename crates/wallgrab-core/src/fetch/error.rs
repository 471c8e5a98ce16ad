//! Fetch error type and classification of curl failures.

use thiserror::Error;

/// Failure of a single GET. Callers log it; nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or transfer failure reported by curl.
    #[error("network error: {0}")]
    Network(#[source] curl::Error),
    /// The configured connect or request deadline elapsed.
    #[error("timed out: {0}")]
    Timeout(#[source] curl::Error),
    /// Server answered with a non-2xx status (after redirects).
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Curl rejected an option before the request was sent (bad URL, bad header).
    #[error("request setup failed: {0}")]
    Setup(#[source] curl::Error),
}

impl FetchError {
    /// Map an error returned by `perform` to `Timeout` or `Network`.
    pub fn from_transfer(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            FetchError::Timeout(e)
        } else {
            FetchError::Network(e)
        }
    }

    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout(_) => "timeout",
            FetchError::Http { .. } => "http",
            FetchError::Setup(_) => "setup",
        }
    }
}

/// `Ok` for 2xx, `FetchError::Http` otherwise.
pub fn check_status(status: u32) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http { status })
    }
}
