//! Redis implementation of the PageStore trait. Page expiry is delegated to
//! the server via SETEX, counters use INCR. Individual commands are atomic
//! on the server; the surrounding check-then-act fetch sequence is not, two
//! concurrent misses both fetch and the last writer wins.
use crate::{CacheError, PageStore};
use async_trait::async_trait;
use rustis::client::Client;
use rustis::commands::StringCommands;
use std::time::Duration;

pub struct RedisPageStore {
    pub client: Client,
    pub page_prefix: String,
    pub count_prefix: String,
}

impl RedisPageStore {
    /// Keys are namespaced as `{namespace}:cached:{url}` and
    /// `{namespace}:count:{url}`.
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            client,
            page_prefix: format!("{}:{}", namespace, "cached"),
            count_prefix: format!("{}:{}", namespace, "count"),
        }
    }

    pub fn page_key(&self, url: &str) -> String {
        format!("{}:{}", self.page_prefix, url)
    }

    pub fn count_key(&self, url: &str) -> String {
        format!("{}:{}", self.count_prefix, url)
    }
}

#[async_trait]
impl PageStore for RedisPageStore {
    async fn get_page(&self, url: &str) -> Result<Option<String>, CacheError> {
        let body: Option<String> = self.client.get(self.page_key(url)).await?;
        Ok(body)
    }

    async fn put_page(
        &self,
        url: &str,
        body: &str,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        // SETEX rejects a zero expiry, clamp to one second
        let seconds = ttl.as_secs().max(1);
        self.client
            .setex(self.page_key(url), seconds, body)
            .await?;
        Ok(())
    }

    async fn incr_count(&self, url: &str) -> Result<u64, CacheError> {
        let count = self.client.incr(self.count_key(url)).await?;
        Ok(count as u64)
    }

    async fn get_count(&self, url: &str) -> Result<u64, CacheError> {
        let count: Option<String> = self.client.get(self.count_key(url)).await?;
        let count = count
            .map(|c| c.parse::<u64>())
            .transpose()
            .map_err(|e| CacheError::Store(e.to_string()))?;
        Ok(count.unwrap_or(0))
    }
}
