//! Fetch a page twice through the in-memory cache and show the counter.
//!
//! Run with: cargo run --example cached_fetch -- http://example.com
use fetchkit::cache::{CachedFetcher, MemoryPageStore};
use fetchkit::http::{build_http_client, HttpClientParams, HttpPageFetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://example.com".to_string());

    let client = build_http_client(HttpClientParams::default())?;
    let delegate = HttpPageFetcher::new(client);
    let cache = CachedFetcher::new(MemoryPageStore::new());

    let body = cache.fetch(&url, &delegate).await?;
    println!("fetched {} bytes from {}", body.len(), url);

    // second call within the TTL is served from cache
    let body = cache.fetch(&url, &delegate).await?;
    println!("cached body is {} bytes", body.len());
    println!("access count: {}", cache.access_count(&url).await?);

    Ok(())
}
