//! Document store access for the movie review service.
//!
//! [`DocumentStore`] is the narrow slice of a search engine the repositories
//! need: index lifecycle, whole-document writes with a refresh policy, lookup
//! by id, simple queries, a max-aggregation and delete-by-query.
//!
//! Two backends implement it:
//! - [`OpenSearchStore`] talks to an OpenSearch cluster over its REST API.
//! - [`MemoryStore`] keeps everything in process; used by tests and for
//!   running the server without a cluster.

pub mod error;
pub mod memory;
pub mod opensearch;
pub mod query;

use async_trait::async_trait;
use serde_json::Value;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use opensearch::OpenSearchStore;
pub use query::{Query, Refresh};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn index_exists(&self, index: &str) -> Result<bool, StoreError>;

    /// Create an index with the given `mappings` object.
    async fn create_index(&self, index: &str, mappings: &Value) -> Result<(), StoreError>;

    async fn delete_index(&self, index: &str) -> Result<(), StoreError>;

    /// Write (create or fully replace) a document under `id`.
    async fn put_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
        refresh: Refresh,
    ) -> Result<(), StoreError>;

    /// Fetch a document's source, or `None` if it does not exist.
    async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Delete a document. Returns `false` if there was nothing to delete.
    async fn delete_document(
        &self,
        index: &str,
        id: &str,
        refresh: Refresh,
    ) -> Result<bool, StoreError>;

    /// Return the sources of at most `size` documents matching `query`.
    async fn search(&self, index: &str, query: &Query, size: usize)
        -> Result<Vec<Value>, StoreError>;

    /// Maximum numeric value of `field` across the index, `None` when empty.
    async fn max_value(&self, index: &str, field: &str) -> Result<Option<f64>, StoreError>;

    /// Delete every document matching `query`. Returns the number deleted.
    async fn delete_by_query(
        &self,
        index: &str,
        query: &Query,
        refresh: Refresh,
    ) -> Result<u64, StoreError>;
}
