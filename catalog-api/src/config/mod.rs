//! Configuration for the catalog API.
//!
//! Settings come from environment variables (optionally loaded from a
//! `.env` file by the binary) with defaults suitable for local development.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::net::SocketAddr;

use catalog_repository::config::DEFAULT_MAX_PAGE_SIZE;
use catalog_repository::opensearch::DEFAULT_INDEX_NAME;

use crate::logging::LogFormat;
use crate::StartupError;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Runtime configuration of the API server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// OpenSearch server URL.
    pub opensearch_url: String,
    /// Name of the catalog index.
    pub index: String,
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Largest accepted page size.
    pub max_page_size: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `CATALOG_INDEX`: Catalog index name (default: product_catalog)
    /// - `BIND_ADDR`: Listen address (default: 0.0.0.0:8000)
    /// - `MAX_PAGE_SIZE`: Largest accepted page size (default: 1000)
    /// - `LOG_FORMAT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opensearch_url =
            lookup("OPENSEARCH_URL").unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string());
        let index = lookup("CATALOG_INDEX").unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| StartupError::config(format!("Invalid BIND_ADDR {}: {}", bind_addr, e)))?;

        let max_page_size = match lookup("MAX_PAGE_SIZE") {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                StartupError::config(format!("Invalid MAX_PAGE_SIZE {}: {}", raw, e))
            })?,
            None => DEFAULT_MAX_PAGE_SIZE,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            opensearch_url,
            index,
            bind_addr,
            max_page_size,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.opensearch_url, "http://localhost:9200");
        assert_eq!(config.index, "product_catalog");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.max_page_size, 1000);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("OPENSEARCH_URL", "http://search:9200"),
            ("CATALOG_INDEX", "catalog_v2"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("MAX_PAGE_SIZE", "50"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.opensearch_url, "http://search:9200");
        assert_eq!(config.index, "catalog_v2");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        let result = ApiConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-address")]));
        assert!(matches!(result, Err(StartupError::ConfigError(_))));

        let result = ApiConfig::from_lookup(lookup_from(&[("MAX_PAGE_SIZE", "many")]));
        assert!(matches!(result, Err(StartupError::ConfigError(_))));

        let result = ApiConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));
        assert!(matches!(result, Err(StartupError::ConfigError(_))));
    }
}
