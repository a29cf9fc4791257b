//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use crate::types::BulkIndexSummary;
use catalog_shared::Product;

/// Abstract interface for search engine operations.
///
/// This trait defines the operations the catalog needs from a search engine.
/// Query bodies are built by the caller (see [`crate::opensearch::queries`])
/// and passed through as raw JSON, so implementations only deal with
/// transport and status handling.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>` for consistent error handling.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Execute a search request against the catalog index.
    ///
    /// # Arguments
    ///
    /// * `body` - The full search request body (query, pagination, inner hits)
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The raw search response
    /// * `Err(SearchError)` - If the request fails or the engine rejects it
    ///
    /// # Example
    ///
    /// ```ignore
    /// let body = queries::build_store_sample_query();
    /// let response = client.search(&body).await?;
    /// println!("{}", response["hits"]["hits"]);
    /// ```
    async fn search(&self, body: &Value) -> Result<Value, SearchError>;

    /// Index products in a single bulk request.
    ///
    /// No document ids are assigned, so indexing the same products twice
    /// creates duplicates.
    ///
    /// # Arguments
    ///
    /// * `products` - Slice of products to index
    ///
    /// # Returns
    ///
    /// * `Ok(BulkIndexSummary)` - Per-item outcome counts; may contain failures
    /// * `Err(SearchError::BulkIndexError)` - If the request itself failed
    async fn bulk_index(&self, products: &[Product]) -> Result<BulkIndexSummary, SearchError>;

    /// Ensure the catalog index exists with proper mappings.
    ///
    /// If the index doesn't exist, it will be created with `stores` mapped as
    /// a nested field, which every store-scoped query relies on.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index exists or was created successfully
    /// * `Err(SearchError)` - If index creation fails
    async fn ensure_index_exists(&self) -> Result<(), SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
