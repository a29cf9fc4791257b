//! Catalog client implementation.
//!
//! This module provides the main client for reading the product catalog.
//! Application code uses this to list stores, list and search products in a
//! store, and look up product details. Every lookup is a single search
//! request; the client builds the body and flattens the nested results.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::CatalogConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries;
use catalog_shared::{Pagination, ProductSearch, ProductView, StoreRecord};

/// Pointer to the matched store record inside a hit.
const INNER_STORE_POINTER: &str = "/inner_hits/stores/hits/hits/0/_source";

/// Product fields read from a hit's `_source`.
#[derive(Debug, Deserialize)]
struct HitSource {
    sku: String,
    name: String,
    category: String,
    description: String,
}

/// `_source` of the store sample query.
#[derive(Debug, Deserialize)]
struct StoreSample {
    #[serde(default)]
    sku: Option<String>,
    #[serde(default)]
    stores: Vec<StoreIdOnly>,
}

#[derive(Debug, Deserialize)]
struct StoreIdOnly {
    store_id: String,
}

/// The main client for reading the product catalog.
pub struct CatalogClient {
    engine: Arc<dyn SearchEngineClient>,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new CatalogClient with default configuration.
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            engine,
            config: CatalogConfig::default(),
        }
    }

    /// Create a new CatalogClient with custom configuration.
    pub fn with_config(engine: Arc<dyn SearchEngineClient>, config: CatalogConfig) -> Self {
        Self { engine, config }
    }

    /// Check page and size against the configured limits.
    fn validate_pagination(&self, pagination: &Pagination) -> Result<(), SearchError> {
        if pagination.page == 0 {
            return Err(SearchError::invalid_query("page must be at least 1"));
        }
        if pagination.size == 0 {
            return Err(SearchError::invalid_query("size must be at least 1"));
        }
        if let Some(max) = self.config.max_page_size {
            if pagination.size > max {
                return Err(SearchError::invalid_query(format!(
                    "size {} exceeds maximum {}",
                    pagination.size, max
                )));
            }
        }
        Ok(())
    }

    /// List store ids.
    /// Output: the store ids listed by the first product, `[]` for an empty index.
    ///
    /// Store ids are sampled from a single document rather than aggregated
    /// across the index.
    #[instrument(skip(self))]
    pub async fn list_store_ids(&self) -> Result<Vec<String>, SearchError> {
        let response = self
            .engine
            .search(&queries::build_store_sample_query())
            .await?;

        let Some(hit) = hits(&response)?.first() else {
            warn!("No products found");
            return Ok(vec![]);
        };

        let source = hit
            .get("_source")
            .cloned()
            .ok_or_else(|| SearchError::parse("hit is missing _source"))?;
        let sample: StoreSample =
            serde_json::from_value(source).map_err(|e| SearchError::parse(e.to_string()))?;

        let store_ids: Vec<String> = sample.stores.into_iter().map(|s| s.store_id).collect();
        debug!(
            sku = sample.sku.as_deref().unwrap_or("Unknown SKU"),
            stores = ?store_ids,
            "Sampled store ids"
        );

        Ok(store_ids)
    }

    /// List products available in a store.
    /// Input: store id, pagination (1-based page, page size)
    /// Output: at most `pagination.size` products, each with its store record
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        store_id: &str,
        pagination: Pagination,
    ) -> Result<Vec<ProductView>, SearchError> {
        self.validate_pagination(&pagination)?;

        let body = queries::build_store_products_query(store_id, &pagination);
        let response = self.engine.search(&body).await?;

        hits(&response)?
            .iter()
            .take(pagination.size)
            .map(parse_hit)
            .collect()
    }

    /// Search products available in a store.
    /// Input: ProductSearch (store id required; category, price range and pagination optional)
    /// Output: at most `search.size` products whose matched store record is in the price range
    #[instrument(skip(self), fields(store_id = %search.store_id))]
    pub async fn search_products(
        &self,
        search: &ProductSearch,
    ) -> Result<Vec<ProductView>, SearchError> {
        let pagination = search.pagination();
        self.validate_pagination(&pagination)?;

        let body = queries::build_search_query(search);
        let response = self.engine.search(&body).await?;

        let mut products = hits(&response)?
            .iter()
            .take(pagination.size)
            .map(parse_hit)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(range) = &search.price_range {
            products.retain(|p| range.contains(p.store.price));
        }

        Ok(products)
    }

    /// Look up one product in one store.
    /// Input: store id, SKU
    /// Output: the product with that store's record, or `SearchError::NotFound`
    #[instrument(skip(self))]
    pub async fn product_details(
        &self,
        store_id: &str,
        sku: &str,
    ) -> Result<ProductView, SearchError> {
        let body = queries::build_product_details_query(store_id, sku);
        let response = self.engine.search(&body).await?;

        let hit = hits(&response)?
            .first()
            .ok_or_else(|| SearchError::product_not_found(store_id, sku))?;

        if hit.pointer(INNER_STORE_POINTER).is_none() {
            return Err(SearchError::product_not_found(store_id, sku));
        }

        parse_hit(hit)
    }

    /// Check whether the search engine is reachable and healthy.
    pub async fn health_check(&self) -> Result<bool, SearchError> {
        self.engine.health_check().await
    }
}

/// Borrow `hits.hits` out of a search response.
fn hits(response: &Value) -> Result<&Vec<Value>, SearchError> {
    response
        .pointer("/hits/hits")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchError::parse("response is missing hits.hits"))
}

/// Flatten a hit into a product view with its first inner store hit.
fn parse_hit(hit: &Value) -> Result<ProductView, SearchError> {
    let source = hit
        .get("_source")
        .cloned()
        .ok_or_else(|| SearchError::parse("hit is missing _source"))?;
    let source: HitSource =
        serde_json::from_value(source).map_err(|e| SearchError::parse(e.to_string()))?;

    let store = hit
        .pointer(INNER_STORE_POINTER)
        .cloned()
        .ok_or_else(|| SearchError::parse(format!("hit {} has no matching store", source.sku)))?;
    let store: StoreRecord =
        serde_json::from_value(store).map_err(|e| SearchError::parse(e.to_string()))?;

    Ok(ProductView {
        sku: source.sku,
        name: source.name,
        category: source.category,
        description: source.description,
        store,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BulkIndexSummary;
    use async_trait::async_trait;
    use catalog_shared::{PriceRange, Product};
    use serde_json::json;
    use tokio::sync::Mutex;

    /// Mock engine returning a canned response and recording request bodies
    struct MockEngine {
        response: Value,
        requests: Mutex<Vec<Value>>,
        should_fail: bool,
    }

    impl MockEngine {
        fn new(response: Value) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                response: Value::Null,
                requests: Mutex::new(Vec::new()),
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl SearchEngineClient for MockEngine {
        async fn search(&self, body: &Value) -> Result<Value, SearchError> {
            self.requests.lock().await.push(body.clone());
            if self.should_fail {
                return Err(SearchError::query("Mock failure"));
            }
            Ok(self.response.clone())
        }

        async fn bulk_index(&self, products: &[Product]) -> Result<BulkIndexSummary, SearchError> {
            Ok(BulkIndexSummary {
                total: products.len(),
                succeeded: products.len(),
                failed: 0,
                errors: vec![],
            })
        }

        async fn ensure_index_exists(&self) -> Result<(), SearchError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(!self.should_fail)
        }
    }

    fn product_hit(sku: &str, store_id: &str, price: f64) -> Value {
        json!({
            "_index": "product_catalog",
            "_source": {
                "sku": sku,
                "name": "Laptop",
                "category": "electronics",
                "description": "A high-quality laptop in the electronics category.",
                "stores": [
                    { "store_id": "store1", "availability": true, "price": 10.0 },
                    { "store_id": store_id, "availability": true, "price": price }
                ]
            },
            "inner_hits": {
                "stores": {
                    "hits": {
                        "hits": [
                            { "_source": { "store_id": store_id, "availability": true, "price": price } }
                        ]
                    }
                }
            }
        })
    }

    fn search_response(hits: Vec<Value>) -> Value {
        json!({ "hits": { "total": { "value": hits.len() }, "hits": hits } })
    }

    fn client(engine: &Arc<MockEngine>) -> CatalogClient {
        CatalogClient::new(engine.clone())
    }

    #[test]
    fn test_parse_hit() {
        let view = parse_hit(&product_hit("SKU00001", "store2", 99.5)).unwrap();

        assert_eq!(view.sku, "SKU00001");
        assert_eq!(view.category, "electronics");
        // The matched inner hit wins over the document's own store list
        assert_eq!(view.store.store_id, "store2");
        assert_eq!(view.store.price, 99.5);
    }

    #[test]
    fn test_parse_hit_missing_inner_hits() {
        let mut hit = product_hit("SKU00001", "store2", 1.0);
        hit.as_object_mut().unwrap().remove("inner_hits");

        let result = parse_hit(&hit);
        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_parse_hit_missing_field() {
        let hit = json!({ "_source": { "sku": "SKU00001" } });
        assert!(matches!(parse_hit(&hit), Err(SearchError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_list_store_ids() {
        let engine = Arc::new(MockEngine::new(search_response(vec![json!({
            "_source": {
                "sku": "SKU00001",
                "stores": [{ "store_id": "store1" }, { "store_id": "store2" }, { "store_id": "store3" }]
            }
        })])));

        let store_ids = client(&engine).list_store_ids().await.unwrap();

        assert_eq!(store_ids, vec!["store1", "store2", "store3"]);
        let requests = engine.requests.lock().await;
        assert_eq!(requests[0]["size"], 1);
    }

    #[tokio::test]
    async fn test_list_store_ids_empty_index() {
        let engine = Arc::new(MockEngine::new(search_response(vec![])));

        let store_ids = client(&engine).list_store_ids().await.unwrap();
        assert!(store_ids.is_empty());
    }

    #[tokio::test]
    async fn test_list_products() {
        let engine = Arc::new(MockEngine::new(search_response(vec![
            product_hit("SKU00001", "store5", 12.0),
            product_hit("SKU00002", "store5", 0.0),
        ])));

        let products = client(&engine)
            .list_products("store5", Pagination::new(2, 10))
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.store.store_id == "store5"));

        let requests = engine.requests.lock().await;
        assert_eq!(requests[0]["from"], 10);
        assert_eq!(requests[0]["size"], 10);
    }

    #[tokio::test]
    async fn test_list_products_never_exceeds_page_size() {
        let hits = (1..=5)
            .map(|i| product_hit(&format!("SKU{:05}", i), "store1", 1.0))
            .collect();
        let engine = Arc::new(MockEngine::new(search_response(hits)));

        let products = client(&engine)
            .list_products("store1", Pagination::new(1, 3))
            .await
            .unwrap();

        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn test_list_products_rejects_bad_pagination() {
        let engine = Arc::new(MockEngine::new(search_response(vec![])));
        let client = CatalogClient::with_config(engine.clone(), CatalogConfig::with_max_page_size(50));

        let result = client.list_products("store1", Pagination::new(0, 10)).await;
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));

        let result = client.list_products("store1", Pagination::new(1, 0)).await;
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));

        let result = client.list_products("store1", Pagination::new(1, 51)).await;
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));

        // Rejected before reaching the engine
        assert!(engine.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_products_filters_price_range() {
        let engine = Arc::new(MockEngine::new(search_response(vec![
            product_hit("SKU00001", "store2", 15.0),
            product_hit("SKU00002", "store2", 250.0),
            product_hit("SKU00003", "store2", 20.0),
        ])));
        let search = ProductSearch::in_store("store2")
            .with_category("electronics")
            .with_price_range(PriceRange::new(10.0, 20.0));

        let products = client(&engine).search_products(&search).await.unwrap();

        let skus: Vec<&str> = products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU00001", "SKU00003"]);
        assert!(products
            .iter()
            .all(|p| p.store.price >= 10.0 && p.store.price <= 20.0));

        let requests = engine.requests.lock().await;
        assert_eq!(requests[0]["query"]["bool"]["must"][0]["term"]["category"], "electronics");
    }

    #[tokio::test]
    async fn test_product_details() {
        let engine = Arc::new(MockEngine::new(search_response(vec![product_hit(
            "SKU00042", "store9", 42.0,
        )])));

        let product = client(&engine)
            .product_details("store9", "SKU00042")
            .await
            .unwrap();

        assert_eq!(product.sku, "SKU00042");
        assert_eq!(product.store.store_id, "store9");
    }

    #[tokio::test]
    async fn test_product_details_not_found() {
        let engine = Arc::new(MockEngine::new(search_response(vec![])));

        let result = client(&engine).product_details("store9", "SKU99999").await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_engine_failure_propagates() {
        let engine = Arc::new(MockEngine::failing());
        let client = client(&engine);

        assert!(matches!(
            client.list_store_ids().await,
            Err(SearchError::QueryError(_))
        ));
        assert!(matches!(
            client.product_details("store1", "SKU00001").await,
            Err(SearchError::QueryError(_))
        ));
        assert!(!client.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let engine = Arc::new(MockEngine::new(json!({ "took": 1 })));

        let result = client(&engine)
            .list_products("store1", Pagination::default())
            .await;

        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }
}
