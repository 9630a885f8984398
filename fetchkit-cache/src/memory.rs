//! In-memory implementation of the PageStore trait. Pages carry their own
//! insertion time, expiry is judged lazily at read time and stale entries
//! are simply overwritten by the next store.
use crate::{CacheEntry, CacheError, PageStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub struct MemoryPageStore {
    pub pages: Mutex<HashMap<String, CacheEntry>>,
    pub counts: Mutex<HashMap<String, u64>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
            counts: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryPageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageStore for MemoryPageStore {
    async fn get_page(&self, url: &str) -> Result<Option<String>, CacheError> {
        let pages = self
            .pages
            .lock()
            .map_err(|e| CacheError::Store(e.to_string()))?;
        Ok(pages
            .get(url)
            .filter(|entry| entry.is_fresh())
            .map(|entry| entry.body.clone()))
    }

    async fn put_page(
        &self,
        url: &str,
        body: &str,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut pages = self
            .pages
            .lock()
            .map_err(|e| CacheError::Store(e.to_string()))?;
        pages.insert(url.to_string(), CacheEntry::new(body.to_string(), ttl));
        Ok(())
    }

    async fn incr_count(&self, url: &str) -> Result<u64, CacheError> {
        let mut counts = self
            .counts
            .lock()
            .map_err(|e| CacheError::Store(e.to_string()))?;
        let count = counts.entry(url.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn get_count(&self, url: &str) -> Result<u64, CacheError> {
        let counts = self
            .counts
            .lock()
            .map_err(|e| CacheError::Store(e.to_string()))?;
        Ok(counts.get(url).copied().unwrap_or(0))
    }
}
