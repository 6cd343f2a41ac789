use thiserror::Error;

/// Errors emitted by the MongoDB adapter.
#[derive(Debug, Error)]
pub enum MongoError {
    /// Connection, command, or query failure.
    #[error("mongodb error: {0}")]
    Driver(#[from] mongodb::error::Error),
    /// A record could not be converted to a BSON document.
    #[error("bson serialization error: {0}")]
    Bson(#[from] bson::ser::Error),
    /// An insert failed; carries the entity kind and record count so the
    /// caller can report exactly what did not land.
    #[error("upload of '{collection}' ({records} records) failed: {source}")]
    Upload {
        collection: String,
        records: usize,
        #[source]
        source: mongodb::error::Error,
    },
}
