//! Error types for the catalog repository.

mod search_error;

pub use search_error::SearchError;
