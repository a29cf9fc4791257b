use std::sync::Arc;

use axum::{Extension, Json};

use crate::errors::ApiError;
use catalog_repository::CatalogClient;

/// `GET /stores`
pub async fn list_stores(
    Extension(catalog): Extension<Arc<CatalogClient>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let store_ids = catalog
        .list_store_ids()
        .await
        .map_err(ApiError::fetching_stores)?;

    Ok(Json(store_ids))
}
