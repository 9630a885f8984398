use crate::CacheError;
use async_trait::async_trait;
use std::time::Duration;

/// Backend trait for the page cache and its access counters.
///
/// A store keeps at most one body per URL; storing again replaces the
/// previous entry and arms a fresh TTL. Counters grow without bound and
/// survive page expiry.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Get the cached body for `url`, `None` when absent or expired
    async fn get_page(&self, url: &str) -> Result<Option<String>, CacheError>;

    /// Store a body for `url`, replacing any previous entry
    async fn put_page(
        &self,
        url: &str,
        body: &str,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    /// Increment the access counter for `url`, returning the new value
    async fn incr_count(&self, url: &str) -> Result<u64, CacheError>;

    /// Current counter value, 0 for never-seen URLs
    async fn get_count(&self, url: &str) -> Result<u64, CacheError>;
}
