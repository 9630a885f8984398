//! MongoDB helpers for fetchkit: bulk topic updates and nginx log
//! statistics over a logs collection.

mod documents;
mod error;
mod stats;

pub use documents::update_topics;
pub use error::MongoUtilError;
pub use stats::{collect_log_stats, LogStats, METHODS};

pub use mongodb;
