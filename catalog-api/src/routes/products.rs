use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    Extension, Json,
};

use crate::errors::ApiError;
use catalog_repository::CatalogClient;
use catalog_shared::{Pagination, ProductSearch, ProductView};

/// `GET /products/:store_id?page&size`
///
/// Products available in the store, one page at a time.
pub async fn list_products(
    Extension(catalog): Extension<Arc<CatalogClient>>,
    Path(store_id): Path<String>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let Query(pagination) = pagination?;
    let products = catalog
        .list_products(&store_id, pagination)
        .await
        .map_err(ApiError::fetching_products)?;

    Ok(Json(products))
}

/// `POST /products/search`
pub async fn search_products(
    Extension(catalog): Extension<Arc<CatalogClient>>,
    search: Result<Json<ProductSearch>, JsonRejection>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let Json(search) = search?;
    let products = catalog
        .search_products(&search)
        .await
        .map_err(ApiError::searching_products)?;

    Ok(Json(products))
}

/// `GET /products/:store_id/:sku`
pub async fn get_product_details(
    Extension(catalog): Extension<Arc<CatalogClient>>,
    Path((store_id, sku)): Path<(String, String)>,
) -> Result<Json<ProductView>, ApiError> {
    let product = catalog
        .product_details(&store_id, &sku)
        .await
        .map_err(ApiError::fetching_product_details)?;

    Ok(Json(product))
}
