mod builder;

use crate::error::FetchError;
pub use builder::FetcherBuilder;
use reqwest::blocking::Client as HttpClient;
use tracing::{debug, warn};

/// Browser-like user-agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request timeout applied by the default fetcher, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches `url` with a GET and returns the response body, or an empty string
/// on any failure (malformed URL, connection error, DNS failure, timeout,
/// non-2xx status).
///
/// Fail-soft by contract: the cause is reported through `tracing` rather than
/// the return value, so callers treat an empty string as "no content". Use
/// [`Fetcher::get`] when the failure cause matters. Single attempt, no retries.
pub fn fetch(url: &str) -> String {
    let fetcher = match Fetcher::builder().build() {
        Ok(f) => f,
        Err(e) => {
            warn!(url, error = %e, "Failed to build fetcher");
            return String::new();
        }
    };

    match fetcher.get(url) {
        Ok(body) => body,
        Err(e) => {
            warn!(url, error = %e, "Error fetching URL");
            String::new()
        }
    }
}

/// Blocking HTTP GET client with a fixed timeout and browser-like headers.
///
/// Follows redirects per the client's standard policy. Holds no state beyond
/// the connection pool, so one fetcher can serve any number of calls.
pub struct Fetcher {
    inner: HttpClient,
}

impl Fetcher {
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    pub(crate) fn from_client(inner: HttpClient) -> Self {
        Self { inner }
    }

    /// GETs `url` and returns the body text on a 2xx response.
    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .inner
            .get(url)
            .send()
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ResponseStatus {
                status_code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::RequestFailed(format!("Failed to read body: {}", e)))?;

        debug!(url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}
