use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] rustis::Error),
}
