//! Cache-and-count web fetcher for fetchkit.
//!
//! This crate provides a page cache with per-URL access counting. It offers a
//! trait-based API with pluggable backends and takes the underlying fetch
//! capability as an injected [`PageFetcher`] rather than owning it.
//!
//! Currently supported backends:
//! - In-memory (always available)
//! - Redis (with the "redis" feature)

mod entry;
mod error;
mod fetcher;
mod memory;
mod store;

#[cfg(feature = "redis")]
mod blob;
#[cfg(feature = "redis")]
mod redis;

pub use entry::{CacheEntry, DEFAULT_TTL};
pub use error::CacheError;
pub use fetcher::{CachedFetcher, PageFetcher, StorePolicy};
pub use memory::MemoryPageStore;
pub use store::PageStore;

#[cfg(feature = "redis")]
pub use blob::RedisBlobCache;
#[cfg(feature = "redis")]
pub use redis::RedisPageStore;
