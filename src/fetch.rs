//! HTTP fetch capability consumed by the page scanners

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use thiserror::Error;

use crate::config::{FETCH_TIMEOUT_MS, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Raw response of a GET request
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

/// Trait for fetching pages from the vendor site
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a URL and return the response regardless of its status code
    async fn get(&self, url: &str) -> Result<Page, FetchError>;

    /// HEAD a URL with redirects followed, returning the final status code
    async fn head(&self, url: &str) -> Result<u16, FetchError>;
}

/// True when a HEAD request resolves to HTTP 200 after redirects.
/// Transport errors count as dead, matching the report's liveness semantics.
pub async fn link_is_live<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> bool {
    matches!(fetcher.head(url).await, Ok(200))
}

/// Fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Page, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Page { status, body })
    }

    async fn head(&self, url: &str) -> Result<u16, FetchError> {
        let response = self.client.head(url).send().await?;
        Ok(response.status().as_u16())
    }
}
