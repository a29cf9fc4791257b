//! # Catalog API
//!
//! HTTP façade over the product catalog search index.
//!
//! This crate provides the router, request handlers, error mapping and the
//! configuration needed to run the catalog API binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod routes;

pub use config::{ApiConfig, Dependencies};
pub use errors::ApiError;

use thiserror::Error;

/// Errors that can occur while starting or running the API server.
#[derive(Error, Debug)]
pub enum StartupError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] catalog_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StartupError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
