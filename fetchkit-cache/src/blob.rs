use crate::CacheError;
use rustis::client::Client;
use rustis::commands::StringCommands;
use tracing::debug;
use uuid::Uuid;

/// UUID-keyed value store on Redis.
///
/// Store a value, get back a generated key, read it later through a typed
/// getter. No TTL and no access counting, unlike the page cache.
pub struct RedisBlobCache {
    pub client: Client,
}

impl RedisBlobCache {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Store `data` under a fresh UUID v4 key and return the key.
    pub async fn store(&self, data: &str) -> Result<String, CacheError> {
        let key = Uuid::new_v4().to_string();
        self.client.set(&key, data).await?;
        debug!(key = %key, bytes = data.len(), "stored blob");
        Ok(key)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let value: Option<String> = self.client.get(key).await?;
        Ok(value)
    }

    /// Read a stored value back as an integer.
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>, CacheError> {
        let value: Option<String> = self.client.get(key).await?;
        value
            .map(|v| {
                v.parse::<i64>()
                    .map_err(|e| CacheError::Store(e.to_string()))
            })
            .transpose()
    }
}
