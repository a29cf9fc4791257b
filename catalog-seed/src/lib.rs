//! # Catalog Seed
//!
//! Tools for filling the catalog index with sample data: a generator for
//! synthetic products, helpers to read and write the JSON array file the
//! tools exchange, and a loader that bulk-indexes that file.

pub mod dataset;
pub mod generators;
pub mod loaders;

pub use dataset::{read_dataset, write_dataset, DatasetError};
pub use generators::CatalogGenerator;
pub use loaders::BulkLoader;
