use std::collections::{BTreeMap, BTreeSet};

use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use mongodb::Database;

use crate::error::MongoError;

/// Field-to-type summary for one collection, inferred from sampled documents.
#[derive(Debug, Clone)]
pub struct CollectionSchema {
    pub collection: String,
    pub documents_sampled: usize,
    pub fields: BTreeMap<String, BTreeSet<&'static str>>,
}

/// Sample up to `sample_size` documents per collection and report the BSON
/// types observed for each field. Post-upload sanity check, not a validator.
pub async fn sample_schema(
    db: &Database,
    sample_size: i64,
) -> Result<Vec<CollectionSchema>, MongoError> {
    let mut report = Vec::new();
    let mut names = db.list_collection_names().await?;
    names.sort();

    for name in names {
        let mut fields: BTreeMap<String, BTreeSet<&'static str>> = BTreeMap::new();
        let mut sampled = 0;
        let mut cursor = db
            .collection::<Document>(&name)
            .find(doc! {})
            .limit(sample_size)
            .await?;
        while let Some(document) = cursor.try_next().await? {
            sampled += 1;
            for (key, value) in &document {
                fields.entry(key.clone()).or_default().insert(bson_type_name(value));
            }
        }
        report.push(CollectionSchema {
            collection: name,
            documents_sampled: sampled,
            fields,
        });
    }
    Ok(report)
}

fn bson_type_name(value: &Bson) -> &'static str {
    match value {
        Bson::Double(_) => "double",
        Bson::String(_) => "string",
        Bson::Array(_) => "array",
        Bson::Document(_) => "document",
        Bson::Boolean(_) => "boolean",
        Bson::Null => "null",
        Bson::Int32(_) => "int32",
        Bson::Int64(_) => "int64",
        Bson::ObjectId(_) => "objectId",
        Bson::DateTime(_) => "date",
        Bson::Timestamp(_) => "timestamp",
        Bson::Binary(_) => "binary",
        Bson::Decimal128(_) => "decimal128",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_match_the_wire_types() {
        assert_eq!(bson_type_name(&Bson::String("x".to_string())), "string");
        assert_eq!(bson_type_name(&Bson::Int64(7)), "int64");
        assert_eq!(bson_type_name(&Bson::Array(vec![])), "array");
        assert_eq!(bson_type_name(&Bson::Null), "null");
    }
}
