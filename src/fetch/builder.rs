use super::{Fetcher, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error::FetchError;
use http::{
    header::{HeaderMap, HeaderName, USER_AGENT},
    HeaderValue,
};
use reqwest::blocking::Client as HttpClient;
use std::str::FromStr;
use std::time::Duration;

pub struct FetcherBuilder {
    timeout: Duration,
    user_agent: String,
    headers: HeaderMap,
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FetcherBuilder {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HeaderMap::new(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> Result<Self, FetchError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let header_name = HeaderName::from_str(key.as_ref())
            .map_err(|e| FetchError::BuildFailed(format!("Invalid header name: {}", e)))?;

        let header_value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| FetchError::BuildFailed(format!("Invalid header value: {}", e)))?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn build(mut self) -> Result<Fetcher, FetchError> {
        let ua = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| FetchError::BuildFailed(format!("Invalid user agent: {}", e)))?;
        self.headers.entry(USER_AGENT).or_insert(ua);

        let inner = HttpClient::builder()
            .timeout(self.timeout)
            .default_headers(self.headers)
            .build()
            .map_err(|e| FetchError::BuildFailed(format!("Failed to build client: {}", e)))?;

        Ok(Fetcher::from_client(inner))
    }
}
