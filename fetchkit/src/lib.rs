//! # fetchkit
//!
//! Small toolkit for counted, TTL-bound page caching plus a couple of
//! MongoDB log utilities.
//!
//! ## Features
//!
//! - **Cache-and-count fetching**: every `fetch` bumps a per-URL access
//!   counter and serves the body from cache while the entry is fresh
//!   (10 seconds by default).
//! - **Pluggable stores**: in-memory out of the box, Redis behind the
//!   `redis` feature.
//! - **Injected fetch capability**: the network call is a [`cache::PageFetcher`]
//!   passed into the cache, not a global wrapped by the cache.
//! - **Store policies**: fail-closed (propagate store errors) or fail-open
//!   (serve uncached while the store is down).
//! - **MongoDB helpers** (feature `mongodb`): bulk `topics` updates and an
//!   nginx log statistics report.
//!
//! ## Modules
//!
//! - `cache`: the cached fetcher, its stores and errors.
//! - `http`: reqwest-backed page fetcher (feature `http`).
//! - `mongo`: document update helper and log statistics (feature `mongodb`).

pub use fetchkit_cache as cache;
#[cfg(feature = "mongodb")]
pub use fetchkit_mongo as mongo;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "mongodb")]
pub use fetchkit_mongo::mongodb;
