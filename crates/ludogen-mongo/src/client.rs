use bson::doc;
use mongodb::{Client, Database};
use tracing::{info, warn};

use crate::error::MongoError;

/// Connect, ping, optionally drop the target database, and hand back a
/// handle to it.
pub async fn connect(
    uri: &str,
    database: &str,
    drop_existing: bool,
) -> Result<Database, MongoError> {
    let client = Client::with_uri_str(uri).await?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    info!(database, "connected to MongoDB");

    if drop_existing
        && client
            .list_database_names()
            .await?
            .iter()
            .any(|name| name == database)
    {
        client.database(database).drop().await?;
        warn!(database, "dropped existing database");
    }

    Ok(client.database(database))
}
