//! Dependency initialization and wiring for the catalog API.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::StartupError;
use catalog_repository::{
    CatalogClient, CatalogConfig, IndexConfig, OpenSearchClient, SearchEngineClient,
};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The catalog client shared by every request handler.
    pub catalog: Arc<CatalogClient>,
}

impl Dependencies {
    /// Initialize all dependencies from the given configuration.
    ///
    /// An unreachable or unhealthy cluster is logged but does not stop the
    /// server from starting; requests fail with 500 until it recovers.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(StartupError)` - If the OpenSearch client cannot be created
    pub async fn new(config: &ApiConfig) -> Result<Self, StartupError> {
        info!(
            opensearch_url = %config.opensearch_url,
            index = %config.index,
            "Initializing dependencies"
        );

        let search_client =
            OpenSearchClient::new(&config.opensearch_url, IndexConfig::new(&config.index)).await?;

        match search_client.health_check().await {
            Ok(true) => info!("OpenSearch connection verified"),
            Ok(false) => warn!("OpenSearch cluster is unhealthy"),
            Err(e) => warn!(error = %e, "OpenSearch health check failed"),
        }

        let catalog = CatalogClient::with_config(
            Arc::new(search_client),
            CatalogConfig::with_max_page_size(config.max_page_size),
        );

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }
}
