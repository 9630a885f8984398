#[cfg(test)]
mod tests {
    mod redis_tests {
        use async_trait::async_trait;
        use dotenvy::dotenv;
        use fetchkit_cache::{
            CacheError, CachedFetcher, PageFetcher, PageStore, RedisBlobCache,
            RedisPageStore,
        };
        use rustis::client::Client;
        use rustis::commands::GenericCommands;
        use serial_test::serial;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::time::Duration;

        struct CountingFetcher {
            calls: AtomicUsize,
            body: &'static str,
        }

        impl CountingFetcher {
            fn new(body: &'static str) -> Self {
                Self {
                    calls: AtomicUsize::new(0),
                    body,
                }
            }
        }

        #[async_trait]
        impl PageFetcher for CountingFetcher {
            async fn fetch_page(&self, _url: &str) -> Result<String, CacheError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                Ok(self.body.to_string())
            }
        }

        async fn get_redis_connection() -> Option<Client> {
            dotenv().ok();
            let _ = tracing_subscriber::fmt().try_init();
            let uri = match std::env::var("REDIS_URI") {
                Ok(uri) => uri,
                Err(_) => {
                    eprintln!("REDIS_URI not set, skipping redis tests");
                    return None;
                }
            };
            Some(
                Client::connect(uri)
                    .await
                    .expect("Error while establishing redis connection"),
            )
        }

        async fn cleanup_namespace(client: &Client, keys: &[String]) {
            if !keys.is_empty() {
                client
                    .del(keys.to_vec())
                    .await
                    .expect("Failed to clean up Redis keys");
            }
        }

        #[tokio::test]
        #[serial]
        async fn test_page_store_roundtrip_and_expiry() {
            let Some(client) = get_redis_connection().await else {
                return;
            };
            let store = RedisPageStore::new(client.clone(), "fetchkit-test-rt");
            let url = "http://example.com/page";

            store
                .put_page(url, "<html>hi</html>", Duration::from_secs(1))
                .await
                .expect("Failed to store page");
            assert_eq!(
                store.get_page(url).await.unwrap().as_deref(),
                Some("<html>hi</html>")
            );

            // SETEX expiry is server-side
            tokio::time::sleep(Duration::from_millis(1200)).await;
            assert!(store.get_page(url).await.unwrap().is_none());

            assert_eq!(store.get_count(url).await.unwrap(), 0);
            assert_eq!(store.incr_count(url).await.unwrap(), 1);
            assert_eq!(store.incr_count(url).await.unwrap(), 2);
            assert_eq!(store.get_count(url).await.unwrap(), 2);

            cleanup_namespace(
                &client,
                &[store.page_key(url), store.count_key(url)],
            )
            .await;
        }

        #[tokio::test]
        #[serial]
        async fn test_cached_fetcher_against_redis() {
            let Some(client) = get_redis_connection().await else {
                return;
            };
            let store = RedisPageStore::new(client.clone(), "fetchkit-test-cf");
            let url = "http://example.com/cached";
            let cleanup_keys = [store.page_key(url), store.count_key(url)];
            cleanup_namespace(&client, &cleanup_keys).await;

            let cache = CachedFetcher::new(store).with_ttl(Duration::from_secs(10));
            let delegate = CountingFetcher::new("body");

            assert_eq!(cache.fetch(url, &delegate).await.unwrap(), "body");
            assert_eq!(cache.fetch(url, &delegate).await.unwrap(), "body");

            assert_eq!(delegate.calls.load(Ordering::SeqCst), 1);
            assert_eq!(cache.access_count(url).await.unwrap(), 2);

            cleanup_namespace(&client, &cleanup_keys).await;
        }

        #[tokio::test]
        #[serial]
        async fn test_blob_cache_store_and_typed_get() {
            let Some(client) = get_redis_connection().await else {
                return;
            };
            let blobs = RedisBlobCache::new(client.clone());

            let key = blobs.store("hello").await.expect("Failed to store blob");
            assert_eq!(blobs.get(&key).await.unwrap().as_deref(), Some("hello"));

            let int_key = blobs.store("42").await.unwrap();
            assert_eq!(blobs.get_int(&int_key).await.unwrap(), Some(42));

            assert!(blobs.get("no-such-key").await.unwrap().is_none());

            cleanup_namespace(&client, &[key, int_key]).await;
        }
    }
}
