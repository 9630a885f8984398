use crate::{CacheError, PageStore, DEFAULT_TTL};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// External fetch capability injected into [`CachedFetcher`].
///
/// Implementations return the page body for a URL or fail with
/// [`CacheError::Fetch`]. No retries are expected from implementors.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String, CacheError>;
}

/// What to do when the backing store errors mid-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePolicy {
    /// Propagate store errors to the caller
    FailClosed,
    /// Serve an uncached direct fetch while the store is down
    FailOpen,
}

/// Caches fetched page bodies per URL and counts every access.
///
/// The fetcher owns its store state; construct one and share it by
/// reference instead of going through process-wide globals. The actual
/// network capability is passed into [`fetch`](CachedFetcher::fetch) as a
/// [`PageFetcher`].
pub struct CachedFetcher<S> {
    store: S,
    ttl: Duration,
    policy: StorePolicy,
}

impl<S> CachedFetcher<S>
where
    S: PageStore,
{
    /// Create a fetcher with [`DEFAULT_TTL`] and the fail-closed policy.
    pub fn new(store: S) -> Self {
        Self {
            store,
            ttl: DEFAULT_TTL,
            policy: StorePolicy::FailClosed,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_policy(mut self, policy: StorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch `url`, serving from cache while the stored entry is fresh.
    ///
    /// The access counter for `url` is bumped exactly once per call, hit
    /// or miss. Delegate failures always propagate; store failures follow
    /// the configured [`StorePolicy`].
    pub async fn fetch<F>(
        &self,
        url: &str,
        fetcher: &F,
    ) -> Result<String, CacheError>
    where
        F: PageFetcher + ?Sized,
    {
        if url.is_empty() {
            return Err(CacheError::EmptyUrl);
        }

        // Counted before the lookup so the increment happens even when
        // the delegate errors later on.
        if let Err(err) = self.store.incr_count(url).await {
            return self.store_failure(url, err, fetcher).await;
        }

        match self.store.get_page(url).await {
            Ok(Some(body)) => {
                debug!(url, "serving cached page");
                return Ok(body);
            }
            Ok(None) => {}
            Err(err) => return self.store_failure(url, err, fetcher).await,
        }

        let body = fetcher.fetch_page(url).await?;

        match self.store.put_page(url, &body, self.ttl).await {
            Ok(()) => debug!(url, ttl = self.ttl.as_secs(), "cached page"),
            Err(err) if self.policy == StorePolicy::FailOpen => {
                warn!(url, error = %err, "store unavailable, skipping cache write");
            }
            Err(err) => return Err(err),
        }

        Ok(body)
    }

    /// Access count for `url`, 0 when never fetched.
    pub async fn access_count(&self, url: &str) -> Result<u64, CacheError> {
        self.store.get_count(url).await
    }

    async fn store_failure<F>(
        &self,
        url: &str,
        err: CacheError,
        fetcher: &F,
    ) -> Result<String, CacheError>
    where
        F: PageFetcher + ?Sized,
    {
        match self.policy {
            StorePolicy::FailClosed => Err(err),
            StorePolicy::FailOpen => {
                warn!(url, error = %err, "store unavailable, fetching uncached");
                fetcher.fetch_page(url).await
            }
        }
    }
}
