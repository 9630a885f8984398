use crate::MongoUtilError;
use mongodb::{
    bson::{doc, Document},
    Collection,
};
use serde::Serialize;
use std::fmt;

/// HTTP methods covered by the report, in output order.
pub const METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Counts collected from an nginx log collection.
///
/// `Display` renders the classic report:
///
/// ```text
/// 94778 logs
/// Methods:
///     method GET: 93842
///     ...
/// 47415 status check
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total: u64,
    pub methods: Vec<(String, u64)>,
    pub status_checks: u64,
}

/// Count total logs, per-method logs and GET `/status` checks.
///
/// One `count_documents` query per figure; store failures propagate.
pub async fn collect_log_stats(
    collection: &Collection<Document>,
) -> Result<LogStats, MongoUtilError> {
    let total = collection.count_documents(doc! {}).await?;

    let mut methods = Vec::with_capacity(METHODS.len());
    for method in METHODS {
        let count = collection
            .count_documents(doc! { "method": method })
            .await?;
        methods.push((method.to_string(), count));
    }

    let status_checks = collection
        .count_documents(doc! { "method": "GET", "path": "/status" })
        .await?;

    Ok(LogStats {
        total,
        methods,
        status_checks,
    })
}

impl fmt::Display for LogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} logs", self.total)?;
        writeln!(f, "Methods:")?;
        for (method, count) in &self.methods {
            writeln!(f, "\tmethod {}: {}", method, count)?;
        }
        write!(f, "{} status check", self.status_checks)
    }
}
