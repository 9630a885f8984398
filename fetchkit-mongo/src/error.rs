use thiserror::Error;

#[derive(Error, Debug)]
pub enum MongoUtilError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
