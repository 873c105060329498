use log::debug;
use mongodb::bson::{Bson, Document};
use mongodb::options::FindOptions;
use mongodb::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::SortOrder;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Anything the driver or server reported, passed through untouched.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
    #[error("insert_many requires at least one document")]
    EmptyBatch,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Optional server-side modifiers for a find.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    pub sort: Option<(String, SortOrder)>,
    pub limit: Option<u32>,
}

impl FindQuery {
    pub fn sorted_by(field: impl Into<String>, order: SortOrder) -> Self {
        FindQuery {
            sort: Some((field.into(), order)),
            limit: None,
        }
    }

    pub fn limited_to(limit: u32) -> Self {
        FindQuery {
            sort: None,
            limit: Some(limit),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// A limit of zero is left to the server, which reads it as "no limit".
    pub fn to_options(&self) -> FindOptions {
        FindOptions::builder()
            .sort(
                self.sort
                    .as_ref()
                    .map(|(field, order)| order.sort_document(field)),
            )
            .limit(self.limit.map(i64::from))
            .build()
    }
}

/// Thin passthrough over one collection. Filters and updates use the
/// server's operator syntax and are not inspected here.
#[derive(Clone, Debug)]
pub struct Store<T> {
    collection: Collection<T>,
}

impl<T> Store<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    pub fn new(collection: Collection<T>) -> Self {
        Store { collection }
    }

    pub fn name(&self) -> &str {
        self.collection.name()
    }

    pub async fn insert_one(&self, record: &T) -> StoreResult<Bson> {
        let result = self.collection.insert_one(record, None).await?;
        debug!(
            "Inserted into '{}' with _id {}",
            self.name(),
            result.inserted_id
        );
        Ok(result.inserted_id)
    }

    /// Identifiers come back in the same order as `records`.
    pub async fn insert_many(&self, records: &[T]) -> StoreResult<Vec<Bson>> {
        if records.is_empty() {
            return Err(StoreError::EmptyBatch);
        }
        let result = self.collection.insert_many(records, None).await?;
        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);
        debug!("Inserted {} documents into '{}'", ids.len(), self.name());
        Ok(ids.into_iter().map(|(_, id)| id).collect())
    }

    pub async fn find_one(&self, filter: Document) -> StoreResult<Option<T>> {
        Ok(self.collection.find_one(filter, None).await?)
    }

    pub async fn find(&self, filter: Document) -> StoreResult<Vec<T>> {
        self.find_with(filter, &FindQuery::default()).await
    }

    pub async fn find_all(&self) -> StoreResult<Vec<T>> {
        self.find(Document::new()).await
    }

    pub async fn find_sorted(
        &self,
        filter: Document,
        field: &str,
        order: SortOrder,
    ) -> StoreResult<Vec<T>> {
        self.find_with(filter, &FindQuery::sorted_by(field, order))
            .await
    }

    pub async fn find_limited(&self, filter: Document, limit: u32) -> StoreResult<Vec<T>> {
        self.find_with(filter, &FindQuery::limited_to(limit)).await
    }

    pub async fn find_with(&self, filter: Document, query: &FindQuery) -> StoreResult<Vec<T>> {
        let mut cursor = self.collection.find(filter, query.to_options()).await?;

        let mut records = Vec::new();
        while cursor.advance().await? {
            records.push(cursor.deserialize_current()?);
        }
        debug!("Find on '{}' returned {} documents", self.name(), records.len());
        Ok(records)
    }

    /// Returns how many documents were actually modified.
    pub async fn update_one(&self, filter: Document, update: Document) -> StoreResult<u64> {
        let result = self.collection.update_one(filter, update, None).await?;
        debug!(
            "Update on '{}' matched {} and modified {}",
            self.name(),
            result.matched_count,
            result.modified_count
        );
        Ok(result.modified_count)
    }

    pub async fn delete_one(&self, filter: Document) -> StoreResult<u64> {
        let result = self.collection.delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }

    pub async fn delete_many(&self, filter: Document) -> StoreResult<u64> {
        let result = self.collection.delete_many(filter, None).await?;
        Ok(result.deleted_count)
    }

    pub async fn count(&self, filter: Document) -> StoreResult<u64> {
        Ok(self.collection.count_documents(filter, None).await?)
    }

    pub async fn drop(&self) -> StoreResult<()> {
        self.collection.drop(None).await?;
        Ok(())
    }
}
