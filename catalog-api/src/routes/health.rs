use std::sync::Arc;

use axum::{http::StatusCode, Extension, Json};
use serde_json::{json, Value};
use tracing::warn;

use catalog_repository::CatalogClient;

/// `GET /health`
///
/// 200 while the cluster reports green or yellow, 503 otherwise.
pub async fn health(
    Extension(catalog): Extension<Arc<CatalogClient>>,
) -> (StatusCode, Json<Value>) {
    match catalog.health_check().await {
        Ok(true) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
