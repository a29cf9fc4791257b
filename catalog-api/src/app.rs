//! Router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::routes::{health, products, stores};
use catalog_repository::CatalogClient;

/// Build the API router around a catalog client.
///
/// `/products/search` is a static segment and takes priority over the
/// `/products/:store_id` parameter route.
pub fn build_app(catalog: Arc<CatalogClient>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/stores", get(stores::list_stores))
        .route("/products/search", post(products::search_products))
        .route("/products/:store_id", get(products::list_products))
        .route("/products/:store_id/:sku", get(products::get_product_details))
        .layer(Extension(catalog))
}
