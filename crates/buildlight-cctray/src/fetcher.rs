//! Status document retrieval.

use std::time::Duration;

use async_trait::async_trait;
use buildlight_core::{Result, WatchError};
use tracing::debug;

/// Default request timeout for status feeds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retrieves the raw status document from an endpoint.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the document body. Transport failures and non-success
    /// responses map to `WatchError::Fetch`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by `reqwest`.
pub struct HttpFetcher {
    http_client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("buildlight/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(fetch_error)?;

        Ok(HttpFetcher { http_client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "GET status document");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::Fetch(format!("{} returned {}", url, status)));
        }

        response.text().await.map_err(fetch_error)
    }
}

fn fetch_error(err: reqwest::Error) -> WatchError {
    WatchError::Fetch(err.to_string())
}
