use bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use tracing::info;

use crate::error::MongoError;

/// Create the index set the consuming backend queries against: unique
/// lookups on the users' hashed and encrypted identity fields, plus
/// secondary indexes on every foreign-key field of the join-style
/// collections.
pub async fn create_indexes(db: &Database) -> Result<(), MongoError> {
    // Users: looked up by username digest. The encrypted email is unique by
    // construction (random nonce per token); the masked form keeps only a
    // 3-character prefix plus the domain, so duplicates are expected and it
    // stays non-unique. Audit tokens are probabilistically unique only, so
    // no unique constraint there either.
    index(db, "users", doc! { "username_hash": 1 }, true).await?;
    index(db, "users", doc! { "email_enc": 1 }, true).await?;
    index(db, "users", doc! { "email_masked": 1 }, false).await?;
    index(db, "users", doc! { "audit_token": 1 }, false).await?;

    index(db, "platforms", doc! { "platform_name": 1 }, true).await?;
    index(db, "genres", doc! { "genre_name": 1 }, true).await?;
    index(db, "contributors", doc! { "type": 1 }, false).await?;

    index(db, "videogames", doc! { "title": 1 }, false).await?;
    index(db, "videogames", doc! { "developers": 1 }, false).await?;
    index(db, "videogames", doc! { "publishers": 1 }, false).await?;
    index(db, "videogames", doc! { "genres": 1 }, false).await?;

    index(db, "platformReleases", doc! { "game_id": 1 }, false).await?;
    index(db, "platformReleases", doc! { "platform_id": 1 }, false).await?;

    index(db, "owned", doc! { "user_id": 1 }, false).await?;
    index(db, "owned", doc! { "game_id": 1 }, false).await?;

    index(db, "plays", doc! { "user_id": 1, "game_id": 1 }, false).await?;
    index(db, "plays", doc! { "datetimeOpened": 1 }, false).await?;

    index(db, "ratings", doc! { "user_id": 1, "game_id": 1 }, false).await?;
    index(db, "ratings", doc! { "ratingDate": 1 }, false).await?;

    index(db, "accessTimes", doc! { "user_id": 1 }, false).await?;
    index(db, "accessTimes", doc! { "time": 1 }, false).await?;

    index(db, "follows", doc! { "follower_id": 1 }, false).await?;
    index(db, "follows", doc! { "followed_id": 1 }, false).await?;

    index(db, "collections", doc! { "user_id": 1 }, false).await?;

    info!("indexes created for all collections");
    Ok(())
}

async fn index(
    db: &Database,
    collection: &str,
    keys: Document,
    unique: bool,
) -> Result<(), MongoError> {
    let options = IndexOptions::builder().unique(unique).build();
    let model = IndexModel::builder().keys(keys).options(options).build();
    db.collection::<Document>(collection)
        .create_index(model)
        .await?;
    Ok(())
}
