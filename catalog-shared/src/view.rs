//! Flattened product view returned by the API.

use serde::{Deserialize, Serialize};

use crate::StoreRecord;

/// A product reshaped around the single store record that matched a query.
///
/// `category` is kept as a plain string so documents indexed with an
/// unexpected category can still be returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub store: StoreRecord,
}
