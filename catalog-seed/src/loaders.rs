//! Bulk loading of catalog products into the search index.

use std::sync::Arc;
use tracing::{info, instrument};

use catalog_repository::{BulkIndexSummary, SearchEngineClient, SearchError};
use catalog_shared::Product;

/// Number of products submitted per bulk request by default.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Loader that bulk-indexes products, one request per batch.
///
/// There are no retries and no document ids: a failed request stops the
/// load, and loading the same file twice indexes every product twice.
pub struct BulkLoader {
    client: Arc<dyn SearchEngineClient>,
    batch_size: usize,
}

impl BulkLoader {
    /// Create a new loader with the default batch size.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self::with_batch_size(client, DEFAULT_BATCH_SIZE)
    }

    /// Create a new loader with a custom batch size (at least 1).
    pub fn with_batch_size(client: Arc<dyn SearchEngineClient>, batch_size: usize) -> Self {
        Self {
            client,
            batch_size: batch_size.max(1),
        }
    }

    /// Ensure the index exists, then submit every product in batches.
    ///
    /// Item-level failures are reported in the summary; a request-level
    /// failure aborts the load and is returned as an error.
    #[instrument(skip(self, products), fields(count = products.len(), batch_size = self.batch_size))]
    pub async fn load(&self, products: &[Product]) -> Result<BulkIndexSummary, SearchError> {
        self.client.ensure_index_exists().await?;

        let mut summary = BulkIndexSummary::default();
        for (batch, chunk) in products.chunks(self.batch_size).enumerate() {
            let result = self.client.bulk_index(chunk).await?;
            info!(
                batch = batch + 1,
                indexed = result.succeeded,
                failed = result.failed,
                "Submitted batch"
            );
            summary.merge(result);
        }

        Ok(summary)
    }
}
