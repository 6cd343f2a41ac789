use bson::Document;
use mongodb::Database;
use serde::Serialize;
use tracing::{info, warn};

use ludogen_core::Dataset;

use crate::error::MongoError;

/// Upload every dataset table to its collection, in generation order.
///
/// Empty tables are skipped with a warning. A failed insert surfaces the
/// collection name and record count; nothing is retried here.
pub async fn upload_dataset(db: &Database, dataset: &Dataset) -> Result<(), MongoError> {
    upload_collection(db, "platforms", &dataset.platforms).await?;
    upload_collection(db, "genres", &dataset.genres).await?;
    upload_collection(db, "contributors", &dataset.contributors).await?;
    upload_collection(db, "videogames", &dataset.videogames).await?;
    upload_collection(db, "platformReleases", &dataset.platform_releases).await?;
    upload_collection(db, "users", &dataset.users).await?;
    upload_collection(db, "owned", &dataset.owned).await?;
    upload_collection(db, "plays", &dataset.plays).await?;
    upload_collection(db, "ratings", &dataset.ratings).await?;
    upload_collection(db, "accessTimes", &dataset.access_times).await?;
    upload_collection(db, "follows", &dataset.follows).await?;
    upload_collection(db, "collections", &dataset.collections).await?;
    Ok(())
}

async fn upload_collection<T: Serialize>(
    db: &Database,
    name: &str,
    records: &[T],
) -> Result<(), MongoError> {
    if records.is_empty() {
        warn!(collection = name, "no records, skipping upload");
        return Ok(());
    }
    let documents = to_documents(records)?;
    db.collection::<Document>(name)
        .insert_many(documents)
        .await
        .map_err(|source| MongoError::Upload {
            collection: name.to_string(),
            records: records.len(),
            source,
        })?;
    info!(collection = name, records = records.len(), "uploaded collection");
    Ok(())
}

fn to_documents<T: Serialize>(records: &[T]) -> Result<Vec<Document>, MongoError> {
    records
        .iter()
        .map(|record| bson::to_document(record).map_err(MongoError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use ludogen_core::{ContributorKind, EntityId};

    use super::*;

    #[test]
    fn records_become_documents_with_the_backend_field_names() {
        let contributor = ludogen_core::Contributor {
            id: EntityId::mint(),
            contributor_name_enc: "token".to_string(),
            kind: ContributorKind::Publisher,
        };
        let doc = to_documents(std::slice::from_ref(&contributor)).expect("to documents");
        let doc = &doc[0];
        assert!(doc.contains_key("_id"));
        assert_eq!(doc.get_str("type").expect("type field"), "publisher");
        assert_eq!(doc.get_str("contributor_name_enc").expect("name"), "token");
    }

    #[test]
    fn follow_documents_carry_both_edge_endpoints() {
        let follow = ludogen_core::Follow {
            id: EntityId::mint(),
            follower_id: EntityId::mint(),
            followed_id: EntityId::mint(),
        };
        let doc = to_documents(std::slice::from_ref(&follow)).expect("to documents");
        let doc = &doc[0];
        assert!(doc.contains_key("follower_id"));
        assert!(doc.contains_key("followed_id"));
        assert_ne!(
            doc.get_str("follower_id").expect("follower"),
            doc.get_str("followed_id").expect("followed")
        );
    }
}
