use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, IndexModel,
    bson::{Bson, Document, doc},
    options::IndexOptions,
};
use tracing::debug;

use crate::config::MongoConfig;

/// What a field-merge update did: whether a document matched the `id` at
/// all, and whether the merge changed at least one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: bool,
    pub modified: bool,
}

/// Store seam for the song collection. Every operation is a single-document
/// call; the store's own atomicity is the only consistency guarantee.
#[async_trait]
pub trait SongStore: Send + Sync {
    async fn count(&self) -> Result<u64>;

    /// Fetch one arbitrary document, used by the connectivity probe.
    async fn find_any(&self) -> Result<Option<Document>>;

    async fn find_all(&self) -> Result<Vec<Document>>;

    /// Lookup by the semantic `id` field, never by the store identity.
    async fn find_by_id(&self, id: i64) -> Result<Option<Document>>;

    /// Insert the document verbatim and return the store-assigned identity.
    async fn insert(&self, song: Document) -> Result<Bson>;

    /// `$set`-style merge: fields in `fields` overwrite, everything else on
    /// the existing document is preserved.
    async fn update(&self, id: i64, fields: Document) -> Result<UpdateOutcome>;

    /// Delete at most one document, returning how many were removed.
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Applies `fields` over a copy of `existing`, field by field.
pub fn merge_fields(existing: &Document, fields: &Document) -> Document {
    let mut merged = existing.clone();
    for (key, value) in fields {
        merged.insert(key.as_str(), value.clone());
    }
    merged
}

#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Builds the client from config. The driver connects lazily, so
    /// authentication problems surface on the first operation, not here.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let url = config.connection_url();
        debug!("connecting to mongodb at {}", config.service());
        let client = Client::with_uri_str(&url).await?;
        let collection = client.database("songs").collection("songs");
        Ok(Self { collection })
    }

    /// Drops any previous collection state and bulk-loads the seed list,
    /// then puts a unique index on `id` so a racing duplicate insert is
    /// rejected by the store rather than by the handler's existence check.
    pub async fn seed(&self, songs: Vec<Document>) -> Result<()> {
        self.collection.drop().await?;
        self.collection.insert_many(songs).await?;
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl SongStore for MongoStore {
    async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_any(&self) -> Result<Option<Document>> {
        Ok(self.collection.find_one(doc! {}).await?)
    }

    async fn find_all(&self) -> Result<Vec<Document>> {
        let songs = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(songs)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn insert(&self, song: Document) -> Result<Bson> {
        let result = self.collection.insert_one(song).await?;
        Ok(result.inserted_id)
    }

    async fn update(&self, id: i64, fields: Document) -> Result<UpdateOutcome> {
        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count > 0,
            modified: result.modified_count > 0,
        })
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_named_fields_and_keeps_the_rest() {
        let existing = doc! { "id": 1_i64, "title": "A", "lyrics": "L" };
        let fields = doc! { "title": "B" };
        let merged = merge_fields(&existing, &fields);
        assert_eq!(merged.get_str("title").unwrap(), "B");
        assert_eq!(merged.get_str("lyrics").unwrap(), "L");
        assert_eq!(merged.get_i64("id").unwrap(), 1);
    }

    #[test]
    fn merge_can_add_new_fields() {
        let existing = doc! { "id": 1_i64, "title": "A" };
        let merged = merge_fields(&existing, &doc! { "genre": "rock" });
        assert_eq!(merged.get_str("genre").unwrap(), "rock");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn identical_merge_reproduces_the_document() {
        let existing = doc! { "id": 1_i64, "title": "A", "lyrics": "L" };
        let merged = merge_fields(&existing, &doc! { "title": "A" });
        assert_eq!(merged, existing);
    }
}
