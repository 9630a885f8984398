use std::time::{Duration, Instant};

/// How long cached pages stay valid unless a fetcher overrides it.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);

/// A cached page body together with its expiry window.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The page body as fetched
    pub body: String,
    /// When this entry was stored
    pub inserted_at: Instant,
    /// Time-to-live armed at store time
    pub ttl: Duration,
}

impl CacheEntry {
    pub fn new(body: String, ttl: Duration) -> Self {
        Self {
            body,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    /// Entry is valid while its age is strictly below its TTL.
    pub fn is_fresh(&self) -> bool {
        self.inserted_at.elapsed() < self.ttl
    }
}
