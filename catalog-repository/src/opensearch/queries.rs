//! OpenSearch query builders.
//!
//! This module provides functions to build the search bodies for every
//! catalog lookup. Store-scoped lookups go through a `nested` query on the
//! `stores` path and ask for a single inner hit, which is the store record
//! the API returns alongside the product.

use serde_json::{json, Value};

use catalog_shared::{Pagination, PriceRange, ProductSearch};

/// Path of the nested store records.
pub const STORES_PATH: &str = "stores";

/// Store fields returned in inner hits.
const STORE_FIELDS: [&str; 3] = ["stores.store_id", "stores.availability", "stores.price"];

/// Build the query that samples store ids from a single product.
///
/// This is not an aggregation: it reads the `stores` list of the first
/// document by `_id`, which is enough when every product lists every store.
pub fn build_store_sample_query() -> Value {
    json!({
        "_source": ["sku", "stores.store_id"],
        "size": 1,
        "query": {
            "match_all": {}
        },
        "sort": [
            { "_id": "asc" }
        ]
    })
}

/// Build a paginated query for products available in a store.
pub fn build_store_products_query(store_id: &str, pagination: &Pagination) -> Value {
    json!({
        "from": pagination.offset(),
        "size": pagination.size,
        "query": nested_store_query(available_in_store(store_id))
    })
}

/// Build a filtered product search.
///
/// The handler:
/// - Matches `category` exactly with a `term` query when given and non-empty
/// - Restricts to products available in the store through a nested filter
/// - Adds a `range` on the store price for each bound that is set
pub fn build_search_query(search: &ProductSearch) -> Value {
    let mut must = Vec::new();
    if let Some(category) = search.category.as_deref().filter(|c| !c.is_empty()) {
        must.push(json!({ "term": { "category": category } }));
    }

    let mut store_clauses = available_in_store(&search.store_id);
    if let Some(range) = search.price_range.as_ref().and_then(build_price_range_clause) {
        store_clauses.push(range);
    }

    let pagination = search.pagination();

    json!({
        "from": pagination.offset(),
        "size": pagination.size,
        "query": {
            "bool": {
                "must": must,
                "filter": [nested_store_query(store_clauses)]
            }
        }
    })
}

/// Build the lookup for one product in one store.
///
/// Availability is not filtered here: an unavailable product still has
/// details to show.
pub fn build_product_details_query(store_id: &str, sku: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "must": [
                    { "term": { "sku": sku } },
                    nested_store_query(vec![
                        json!({ "match": { "stores.store_id": store_id } })
                    ])
                ]
            }
        }
    })
}

/// Clauses matching a store record that is available.
fn available_in_store(store_id: &str) -> Vec<Value> {
    vec![
        json!({ "match": { "stores.store_id": store_id } }),
        json!({ "match": { "stores.availability": true } }),
    ]
}

/// Build a `range` clause on the store price, or `None` for an unbounded range.
fn build_price_range_clause(range: &PriceRange) -> Option<Value> {
    if range.is_unbounded() {
        return None;
    }

    let mut bounds = serde_json::Map::new();
    if let Some(min) = range.min {
        bounds.insert("gte".to_string(), json!(min));
    }
    if let Some(max) = range.max {
        bounds.insert("lte".to_string(), json!(max));
    }

    Some(json!({ "range": { "stores.price": bounds } }))
}

/// Wrap store clauses in a nested query returning the first matching store.
fn nested_store_query(must: Vec<Value>) -> Value {
    json!({
        "nested": {
            "path": STORES_PATH,
            "query": {
                "bool": { "must": must }
            },
            "inner_hits": {
                "size": 1,
                "_source": {
                    "includes": STORE_FIELDS
                }
            }
        }
    })
}
