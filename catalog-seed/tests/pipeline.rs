use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use catalog_repository::{BulkIndexSummary, CatalogClient, SearchEngineClient, SearchError};
use catalog_seed::{read_dataset, write_dataset, BulkLoader, CatalogGenerator};
use catalog_shared::Product;

/// Engine keeping indexed products in memory
#[derive(Default)]
struct InMemoryEngine {
    documents: Mutex<Vec<Product>>,
    index_created: Mutex<bool>,
}

#[async_trait]
impl SearchEngineClient for InMemoryEngine {
    /// Only the store sample query is supported: the first document is returned
    async fn search(&self, body: &Value) -> Result<Value, SearchError> {
        if body["query"].get("match_all").is_none() {
            return Err(SearchError::query("unsupported query"));
        }

        let documents = self.documents.lock().await;
        let hits: Vec<Value> = documents
            .iter()
            .take(1)
            .map(|product| json!({ "_source": product }))
            .collect();
        Ok(json!({ "hits": { "hits": hits } }))
    }

    async fn bulk_index(&self, products: &[Product]) -> Result<BulkIndexSummary, SearchError> {
        if !*self.index_created.lock().await {
            return Err(SearchError::bulk_index("index does not exist"));
        }
        self.documents.lock().await.extend_from_slice(products);
        Ok(BulkIndexSummary {
            total: products.len(),
            succeeded: products.len(),
            failed: 0,
            errors: vec![],
        })
    }

    async fn ensure_index_exists(&self) -> Result<(), SearchError> {
        *self.index_created.lock().await = true;
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        Ok(true)
    }
}

#[tokio::test]
async fn generated_file_loads_and_exposes_stores() {
    let path = std::env::temp_dir().join(format!(
        "catalog-seed-pipeline-{}.json",
        std::process::id()
    ));

    let products = CatalogGenerator::new(5, Some(11)).generate(250);
    write_dataset(&path, &products).unwrap();
    let loaded = read_dataset(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, products);

    let engine = Arc::new(InMemoryEngine::default());
    let summary = BulkLoader::with_batch_size(engine.clone(), 100)
        .load(&loaded)
        .await
        .unwrap();
    assert_eq!(summary.total, 250);
    assert!(summary.is_success());
    assert_eq!(engine.documents.lock().await.len(), 250);

    let catalog = CatalogClient::new(engine);
    let stores = catalog.list_store_ids().await.unwrap();
    assert_eq!(stores, vec!["store1", "store2", "store3", "store4", "store5"]);
}

#[tokio::test]
async fn reloading_duplicates_documents() {
    let products = CatalogGenerator::new(2, Some(3)).generate(10);
    let engine = Arc::new(InMemoryEngine::default());
    let loader = BulkLoader::new(engine.clone());

    loader.load(&products).await.unwrap();
    loader.load(&products).await.unwrap();

    assert_eq!(engine.documents.lock().await.len(), 20);
}
