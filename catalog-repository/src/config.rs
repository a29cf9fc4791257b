//! Configuration types for the CatalogClient.

/// Default upper bound on the requested page size.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Configuration for the CatalogClient.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Maximum number of products allowed on a single page.
    /// Set to None to disable the limit (not recommended for production).
    pub max_page_size: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_page_size: Some(DEFAULT_MAX_PAGE_SIZE),
        }
    }
}

impl CatalogConfig {
    /// Create a config with a custom page size limit.
    pub fn with_max_page_size(max_page_size: usize) -> Self {
        Self {
            max_page_size: Some(max_page_size),
        }
    }
}
