//! In-process [`DocumentStore`] backend.
//!
//! Every write is visible immediately, so refresh policies are accepted and
//! ignored. Query semantics approximate OpenSearch closely enough for the
//! repositories: `term` is exact equality (numbers compared numerically,
//! arrays match on any element) and `match` is an OR over lower-cased
//! alphanumeric tokens. A `bool.must` holds when every clause does.
//! Searches return documents in ascending id order.

use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{DocumentStore, Query, Refresh, StoreError};

type Index = HashMap<String, Value>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    indices: RwLock<HashMap<String, Index>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: while set, every operation fails with a 503.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Api {
                status: 503,
                body: "memory store marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.indices.read().await.contains_key(index))
    }

    async fn create_index(&self, index: &str, _mappings: &Value) -> Result<(), StoreError> {
        self.check_available()?;
        let mut indices = self.indices.write().await;
        if indices.contains_key(index) {
            return Err(StoreError::Api {
                status: 400,
                body: format!("index [{index}] already exists"),
            });
        }
        indices.insert(index.to_string(), Index::new());
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.indices
            .write()
            .await
            .remove(index)
            .map(|_| ())
            .ok_or_else(|| StoreError::index_not_found(index))
    }

    async fn put_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
        _refresh: Refresh,
    ) -> Result<(), StoreError> {
        self.check_available()?;
        // Like OpenSearch, writing into a missing index creates it.
        self.indices
            .write()
            .await
            .entry(index.to_string())
            .or_default()
            .insert(id.to_string(), document.clone());
        Ok(())
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, StoreError> {
        self.check_available()?;
        Ok(self
            .indices
            .read()
            .await
            .get(index)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn delete_document(
        &self,
        index: &str,
        id: &str,
        _refresh: Refresh,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self
            .indices
            .write()
            .await
            .get_mut(index)
            .and_then(|docs| docs.remove(id))
            .is_some())
    }

    async fn search(
        &self,
        index: &str,
        query: &Query,
        size: usize,
    ) -> Result<Vec<Value>, StoreError> {
        self.check_available()?;
        let indices = self.indices.read().await;
        let docs = indices
            .get(index)
            .ok_or_else(|| StoreError::index_not_found(index))?;

        let mut hits: Vec<(&String, &Value)> = docs
            .iter()
            .filter(|(_, doc)| matches(query, doc))
            .collect();
        hits.sort_by(|a, b| compare_ids(a.0, b.0));

        Ok(hits
            .into_iter()
            .take(size)
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn max_value(&self, index: &str, field: &str) -> Result<Option<f64>, StoreError> {
        self.check_available()?;
        let indices = self.indices.read().await;
        let docs = indices
            .get(index)
            .ok_or_else(|| StoreError::index_not_found(index))?;

        Ok(docs
            .values()
            .filter_map(|doc| doc.get(field).and_then(Value::as_f64))
            .reduce(f64::max))
    }

    async fn delete_by_query(
        &self,
        index: &str,
        query: &Query,
        _refresh: Refresh,
    ) -> Result<u64, StoreError> {
        self.check_available()?;
        let mut indices = self.indices.write().await;
        let docs = indices
            .get_mut(index)
            .ok_or_else(|| StoreError::index_not_found(index))?;

        let before = docs.len();
        docs.retain(|_, doc| !matches(query, doc));
        Ok((before - docs.len()) as u64)
    }
}

/// Numeric ids sort numerically; anything else falls back to string order.
fn compare_ids(a: &str, b: &str) -> CmpOrdering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

fn matches(query: &Query, doc: &Value) -> bool {
    match query {
        Query::MatchAll => true,
        Query::Term { field, value } => doc
            .get(field)
            .is_some_and(|stored| term_matches(stored, value)),
        Query::Match { field, text } => doc
            .get(field)
            .is_some_and(|stored| text_matches(stored, text)),
        Query::MultiMatch { query, fields } => fields.iter().any(|field| {
            doc.get(field)
                .is_some_and(|stored| text_matches(stored, query))
        }),
        Query::All(clauses) => clauses.iter().all(|clause| matches(clause, doc)),
    }
}

fn term_matches(stored: &Value, wanted: &Value) -> bool {
    match (stored, wanted) {
        (Value::Array(items), _) => items.iter().any(|item| term_matches(item, wanted)),
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => stored == wanted,
    }
}

fn text_matches(stored: &Value, text: &str) -> bool {
    let wanted = tokens(text);
    if wanted.is_empty() {
        return false;
    }

    let haystack: Vec<String> = match stored {
        Value::String(s) => tokens(s),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(tokens)
            .collect(),
        _ => Vec::new(),
    };

    wanted.iter().any(|token| haystack.contains(token))
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
