//! HTTP error mapping.
//!
//! Search failures become a 500 whose detail names the failed operation and
//! embeds the underlying message. Only the product details lookup reports
//! 404, and invalid pagination reports 400. Requests axum cannot extract keep
//! the rejection's status but use the same `{"detail": ...}` body.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use catalog_repository::SearchError;

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested product is not listed in the store.
    #[error("Product not found")]
    NotFound,

    /// The request parameters were rejected before querying.
    #[error("{0}")]
    BadRequest(String),

    /// The request body or query string could not be extracted.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Any other failure while talking to the search engine.
    #[error("Error {action}: {source}")]
    Internal {
        action: &'static str,
        source: SearchError,
    },
}

impl ApiError {
    fn from_search(action: &'static str, err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery(msg) => Self::BadRequest(msg),
            source => Self::Internal { action, source },
        }
    }

    pub fn fetching_stores(err: SearchError) -> Self {
        Self::from_search("fetching stores", err)
    }

    pub fn fetching_products(err: SearchError) -> Self {
        Self::from_search("fetching products", err)
    }

    pub fn searching_products(err: SearchError) -> Self {
        Self::from_search("searching products", err)
    }

    pub fn fetching_product_details(err: SearchError) -> Self {
        if err.is_not_found() {
            return Self::NotFound;
        }
        Self::from_search("fetching product details", err)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_message_embeds_source() {
        let err = ApiError::fetching_stores(SearchError::connection("connection refused"));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Error fetching stores: Connection error: connection refused"
        );
    }

    #[test]
    fn test_not_found_only_for_details() {
        let err = ApiError::fetching_product_details(SearchError::product_not_found("s", "k"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Product not found");

        let err = ApiError::fetching_products(SearchError::product_not_found("s", "k"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_query_is_bad_request() {
        let err = ApiError::searching_products(SearchError::invalid_query("size must be at least 1"));

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "size must be at least 1");
    }
}
