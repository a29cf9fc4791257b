//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend, along with the catalog index mapping and
//! the query builders shared by every backend.

mod client;
mod index_config;
pub mod queries;

pub use client::OpenSearchClient;
pub use index_config::{get_index_settings, IndexConfig, DEFAULT_INDEX_NAME};
