//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the product catalog index.

use serde_json::{json, Value};

/// The default name of the catalog index.
pub const DEFAULT_INDEX_NAME: &str = "product_catalog";

/// Which index the client reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub index: String,
}

impl IndexConfig {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME)
    }
}

/// Get the index settings and mappings for the product catalog index.
///
/// The configuration includes:
/// - **Keyword fields**: `sku` and `category` for exact `term` lookups
/// - **Text fields**: `name` and `description`, with a raw keyword on `name`
/// - **Nested stores**: `stores` as a `nested` field so store id,
///   availability and price are matched on the same store record
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "sku": {
                    "type": "keyword"
                },
                "name": {
                    "type": "text",
                    "fields": {
                        "raw": {
                            "type": "keyword"
                        }
                    }
                },
                "category": {
                    "type": "keyword"
                },
                "description": {
                    "type": "text"
                },
                "stores": {
                    "type": "nested",
                    "properties": {
                        "store_id": {
                            "type": "keyword"
                        },
                        "availability": {
                            "type": "boolean"
                        },
                        "price": {
                            "type": "float"
                        }
                    }
                }
            }
        }
    })
}
