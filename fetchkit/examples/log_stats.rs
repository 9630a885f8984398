//! Print nginx log statistics from a MongoDB collection.
//!
//! Run with: MONGODB_URI=mongodb://127.0.0.1:27017 \
//!     cargo run --example log_stats --features mongodb
use fetchkit::mongo::collect_log_stats;
use fetchkit::mongodb::bson::Document;
use fetchkit::mongodb::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
    let client = Client::with_uri_str(&uri).await?;
    let collection = client.database("logs").collection::<Document>("nginx");

    let stats = collect_log_stats(&collection).await?;
    println!("{}", stats);

    Ok(())
}
