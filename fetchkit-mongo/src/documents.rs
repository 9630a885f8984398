use crate::MongoUtilError;
use mongodb::{
    bson::{doc, Document},
    Collection,
};
use tracing::debug;

/// Set the `topics` field on every document whose `name` matches.
///
/// Returns the number of documents modified. Store failures propagate.
pub async fn update_topics(
    collection: &Collection<Document>,
    name: &str,
    topics: Vec<String>,
) -> Result<u64, MongoUtilError> {
    let result = collection
        .update_many(
            doc! { "name": name },
            doc! { "$set": { "topics": topics } },
        )
        .await?;

    debug!(name, modified = result.modified_count, "updated topics");
    Ok(result.modified_count)
}
