//! HTTP client module for the page-fetch delegate.
//!
//! # Example
//! ```no_run
//! use fetchkit::cache::{CachedFetcher, MemoryPageStore};
//! use fetchkit::http::{build_http_client, HttpClientParams, HttpPageFetcher};
//!
//! # async fn run() {
//! let client = build_http_client(HttpClientParams::default()).unwrap();
//! let delegate = HttpPageFetcher::new(client);
//! let cache = CachedFetcher::new(MemoryPageStore::new());
//! let body = cache.fetch("http://example.com", &delegate).await.unwrap();
//! # }
//! ```
use async_trait::async_trait;
use fetchkit_cache::{CacheError, PageFetcher};
use tracing::debug;

/// Parameters for configuring the fetch client.
#[derive(Debug, Clone)]
pub struct HttpClientParams<'a> {
    pub timeout: u64,
    pub connect_timeout: u64,
    pub user_agent: &'a str,
}

impl Default for HttpClientParams<'static> {
    fn default() -> Self {
        Self {
            timeout: 30,
            connect_timeout: 10,
            user_agent: concat!("fetchkit/", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builds an HTTP client with the specified parameters.
///
/// Creates a reqwest::Client configured with rustls TLS, the given
/// timeouts and user agent.
pub fn build_http_client(
    params: HttpClientParams,
) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .use_rustls_tls()
        .timeout(std::time::Duration::from_secs(params.timeout))
        .connect_timeout(std::time::Duration::from_secs(params.connect_timeout))
        .user_agent(params.user_agent)
        .build()
}

/// Page fetcher backed by reqwest.
///
/// Issues a single GET per call. Non-2xx statuses and transport failures
/// surface as [`CacheError::Fetch`]; there are no retries and no fallback
/// value, callers decide what a failed fetch means.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, CacheError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CacheError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| CacheError::Fetch(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| CacheError::Fetch(e.to_string()))?;

        debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
