//! # Catalog Repository
//!
//! This crate provides traits and implementations for reading the product
//! catalog out of the search engine. It includes definitions for errors,
//! the search engine interface, a concrete implementation for OpenSearch,
//! and [`CatalogClient`], which turns catalog lookups into search queries
//! and reshapes the nested results.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use opensearch::{IndexConfig, OpenSearchClient};
pub use types::BulkIndexSummary;
