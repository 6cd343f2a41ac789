//! Database-side persistence adapter: MongoDB connect/drop, collection
//! upload, index creation, and a sampled schema report. Invoked once at the
//! end of a generation run; uploads are not retried and never partially
//! committed by this layer.

pub mod client;
pub mod error;
pub mod indexes;
pub mod schema;
pub mod upload;

pub use client::connect;
pub use error::MongoError;
pub use indexes::create_indexes;
pub use schema::{CollectionSchema, sample_schema};
pub use upload::upload_dataset;

/// Database name the consuming backend expects.
pub const DATABASE_NAME: &str = "game_db";
