//! Shared plumbing for repositories backed by one document-store index.

use std::sync::Arc;

use marquee_core::ids::IdAllocator;
use marquee_core::types::DbId;
use marquee_store::{DocumentStore, Query, Refresh};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::DbError;

/// Upper bound on documents returned by any listing or search.
pub(crate) const MAX_RETURNED_RESULTS: usize = 1000;

/// One index plus its id counter.
///
/// Every write requests `refresh=wait_for` so that a read issued later in the
/// same request observes it.
pub(crate) struct Collection {
    store: Arc<dyn DocumentStore>,
    index: &'static str,
    mappings: Value,
    ids: IdAllocator,
}

impl Collection {
    pub(crate) fn new(store: Arc<dyn DocumentStore>, index: &'static str, mappings: Value) -> Self {
        Self {
            store,
            index,
            mappings,
            ids: IdAllocator::default(),
        }
    }

    pub(crate) fn index(&self) -> &'static str {
        self.index
    }

    /// Create the index if missing, then seed the id counter from the
    /// highest stored id.
    pub(crate) async fn bootstrap(&self) -> Result<(), DbError> {
        if self.store.index_exists(self.index).await? {
            tracing::info!(index = self.index, "Index already exists");
        } else {
            self.store.create_index(self.index, &self.mappings).await?;
            tracing::info!(index = self.index, "Index created");
        }

        let max_id = self
            .store
            .max_value(self.index, "id")
            .await?
            .map_or(0, |max| max as DbId);
        self.ids.reseed(max_id);
        tracing::info!(index = self.index, next_id = max_id + 1, "Id counter seeded");
        Ok(())
    }

    /// Drop the index (if present) and bootstrap it again from scratch.
    pub(crate) async fn reinitialize(&self) -> Result<(), DbError> {
        if self.store.index_exists(self.index).await? {
            self.store.delete_index(self.index).await?;
            tracing::info!(index = self.index, "Index deleted");
        }
        self.bootstrap().await
    }

    pub(crate) fn next_id(&self) -> DbId {
        self.ids.next_id()
    }

    /// Documents matching `query`, at most [`MAX_RETURNED_RESULTS`] of them.
    pub(crate) async fn search<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, DbError> {
        let docs = self
            .store
            .search(self.index, query, MAX_RETURNED_RESULTS)
            .await?;
        if docs.len() == MAX_RETURNED_RESULTS {
            tracing::warn!(
                index = self.index,
                limit = MAX_RETURNED_RESULTS,
                "Search hit the result cap; later matches were dropped",
            );
        }
        docs.into_iter().map(|doc| self.decode(doc)).collect()
    }

    pub(crate) async fn all<T: DeserializeOwned>(&self) -> Result<Vec<T>, DbError> {
        self.search(&Query::MatchAll).await
    }

    pub(crate) async fn find<T: DeserializeOwned>(&self, id: DbId) -> Result<Option<T>, DbError> {
        self.store
            .get_document(self.index, &id.to_string())
            .await?
            .map(|doc| self.decode(doc))
            .transpose()
    }

    pub(crate) async fn put<T: Serialize>(&self, id: DbId, document: &T) -> Result<(), DbError> {
        let body = serde_json::to_value(document).map_err(|source| DbError::Malformed {
            index: self.index,
            source,
        })?;
        self.store
            .put_document(self.index, &id.to_string(), &body, Refresh::WaitFor)
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        Ok(self
            .store
            .delete_document(self.index, &id.to_string(), Refresh::WaitFor)
            .await?)
    }

    /// Delete every document, keeping the index and its mappings.
    pub(crate) async fn clear(&self) -> Result<u64, DbError> {
        Ok(self
            .store
            .delete_by_query(self.index, &Query::MatchAll, Refresh::Immediate)
            .await?)
    }

    fn decode<T: DeserializeOwned>(&self, doc: Value) -> Result<T, DbError> {
        serde_json::from_value(doc).map_err(|source| DbError::Malformed {
            index: self.index,
            source,
        })
    }
}
