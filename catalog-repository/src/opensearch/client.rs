//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    BulkParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::index_config::{get_index_settings, IndexConfig};
use crate::types::BulkIndexSummary;
use catalog_shared::Product;

/// OpenSearch client implementation.
///
/// Talks to a single OpenSearch (or Elasticsearch-compatible) node over HTTP.
///
/// # Example
///
/// ```ignore
/// use catalog_repository::opensearch::{queries, IndexConfig};
/// let client = OpenSearchClient::new("http://localhost:9200", IndexConfig::default()).await?;
///
/// client.ensure_index_exists().await?;
/// let response = client.search(&queries::build_store_sample_query()).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    index_config: IndexConfig,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `index_config` - The index configuration containing the index name
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub async fn new(url: &str, index_config: IndexConfig) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            index = %index_config.index,
            "Created OpenSearch client"
        );

        Ok(Self {
            client,
            index_config,
        })
    }
}

/// Build the bulk operations for `products`: an action line naming the index
/// followed by the document, for each product. No `_id` is set.
pub(crate) fn bulk_operations(index: &str, products: &[Product]) -> Result<Vec<Value>, SearchError> {
    let mut operations = Vec::with_capacity(products.len() * 2);

    for product in products {
        operations.push(json!({ "index": { "_index": index } }));
        let document =
            serde_json::to_value(product).map_err(|e| SearchError::serialization(e.to_string()))?;
        operations.push(document);
    }

    Ok(operations)
}

/// Count per-item outcomes in a bulk response.
///
/// When the response carries no `items` array the top-level `errors` flag
/// decides whether the whole batch succeeded.
pub(crate) fn summarize_bulk_response(response: &Value, total: usize) -> BulkIndexSummary {
    let Some(items) = response.get("items").and_then(Value::as_array) else {
        let has_errors = response
            .get("errors")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        return if has_errors {
            BulkIndexSummary {
                total,
                succeeded: 0,
                failed: total,
                errors: vec!["bulk request reported errors without item details".to_string()],
            }
        } else {
            BulkIndexSummary {
                total,
                succeeded: total,
                failed: 0,
                errors: vec![],
            }
        };
    };

    let errors: Vec<String> = items
        .iter()
        .filter_map(|item| item.get("index").and_then(|i| i.get("error")))
        .map(|error| {
            error
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string())
        })
        .collect();

    let failed = errors.len();
    BulkIndexSummary {
        total,
        succeeded: total.saturating_sub(failed),
        failed,
        errors,
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self, body), fields(index = %self.index_config.index))]
    async fn search(&self, body: &Value) -> Result<Value, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[&self.index_config.index]))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    /// Index products through the bulk API.
    ///
    /// Documents are sent without an `_id`, so the engine assigns one and
    /// rerunning a load duplicates every product.
    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn bulk_index(&self, products: &[Product]) -> Result<BulkIndexSummary, SearchError> {
        if products.is_empty() {
            return Ok(BulkIndexSummary::default());
        }

        let body: Vec<JsonBody<Value>> = bulk_operations(&self.index_config.index, products)?
            .into_iter()
            .map(JsonBody::from)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::Index(&self.index_config.index))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchError::bulk_index(format!(
                "Bulk index failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let summary = summarize_bulk_response(&response_body, products.len());
        if summary.is_success() {
            debug!(count = summary.succeeded, "Products indexed");
        } else {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "Bulk request had item failures"
            );
        }

        Ok(summary)
    }

    #[instrument(skip(self), fields(index = %self.index_config.index))]
    async fn ensure_index_exists(&self) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[&self.index_config.index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            debug!("Index already exists");
            return Ok(());
        }
        if status.as_u16() != 404 {
            return Err(SearchError::index_creation(format!(
                "Index existence check failed with status {}",
                status
            )));
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index_config.index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(SearchError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!("Created catalog index");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let health: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let status = health
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown");

        debug!(status = %status, "Cluster health");

        Ok(status == "green" || status == "yellow")
    }
}
