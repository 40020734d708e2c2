//! REST client for an OpenSearch cluster.
//!
//! Wraps the handful of OpenSearch HTTP endpoints the repositories use
//! (index lifecycle, `_doc`, `_search`, `_delete_by_query`)
//! using [`reqwest`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{DocumentStore, Query, Refresh, StoreError};

/// Name of the aggregation used by [`DocumentStore::max_value`].
const MAX_AGG: &str = "max_value";

/// HTTP client for a single OpenSearch node.
pub struct OpenSearchStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    found: bool,
    #[serde(rename = "_source")]
    source: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
    #[serde(default)]
    aggregations: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_source")]
    source: Value,
}

#[derive(Debug, Deserialize)]
struct DeleteByQueryResponse {
    deleted: u64,
}

impl OpenSearchStore {
    /// Create a client for the node at `base_url`, e.g. `http://localhost:9200`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`StoreError::Api`] carrying the status and body on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for OpenSearchStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let response = self.client.get(self.url("_cluster/health")).send().await?;
        Self::check_status(response).await
    }

    async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
        let response = self.client.head(self.url(index)).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            _ => {
                Self::check_status(response).await?;
                Ok(true)
            }
        }
    }

    async fn create_index(&self, index: &str, mappings: &Value) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.url(index))
            .json(&json!({ "mappings": mappings }))
            .send()
            .await?;
        Self::check_status(response).await?;
        tracing::info!(index, "Index created");
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<(), StoreError> {
        let response = self.client.delete(self.url(index)).send().await?;
        Self::check_status(response).await?;
        tracing::info!(index, "Index deleted");
        Ok(())
    }

    async fn put_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
        refresh: Refresh,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.url(&format!("{index}/_doc/{id}")))
            .query(&[("refresh", refresh.as_param())])
            .json(document)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("{index}/_doc/{id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let GetResponse { found, source } = Self::parse_response(response).await?;
        Ok(source.filter(|_| found))
    }

    async fn delete_document(
        &self,
        index: &str,
        id: &str,
        refresh: Refresh,
    ) -> Result<bool, StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("{index}/_doc/{id}")))
            .query(&[("refresh", refresh.as_param())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        Self::check_status(response).await?;
        Ok(true)
    }

    async fn search(
        &self,
        index: &str,
        query: &Query,
        size: usize,
    ) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .post(self.url(&format!("{index}/_search")))
            .json(&json!({ "size": size, "query": query.to_dsl() }))
            .send()
            .await?;

        let body: SearchResponse = Self::parse_response(response).await?;
        Ok(body.hits.hits.into_iter().map(|hit| hit.source).collect())
    }

    async fn max_value(&self, index: &str, field: &str) -> Result<Option<f64>, StoreError> {
        let response = self
            .client
            .post(self.url(&format!("{index}/_search")))
            .json(&json!({
                "size": 0,
                "aggs": { MAX_AGG: { "max": { "field": field } } }
            }))
            .send()
            .await?;

        let body: SearchResponse = Self::parse_response(response).await?;
        Ok(body
            .aggregations
            .as_ref()
            .and_then(|aggs| aggs.get(MAX_AGG))
            .and_then(|agg| agg.get("value"))
            .and_then(Value::as_f64))
    }

    async fn delete_by_query(
        &self,
        index: &str,
        query: &Query,
        refresh: Refresh,
    ) -> Result<u64, StoreError> {
        // `_delete_by_query` only accepts a boolean refresh flag.
        let refresh = match refresh {
            Refresh::None => "false",
            Refresh::WaitFor | Refresh::Immediate => "true",
        };

        let response = self
            .client
            .post(self.url(&format!("{index}/_delete_by_query")))
            .query(&[("refresh", refresh)])
            .json(&json!({ "query": query.to_dsl() }))
            .send()
            .await?;

        let body: DeleteByQueryResponse = Self::parse_response(response).await?;
        Ok(body.deleted)
    }
}
