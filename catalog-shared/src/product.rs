//! Product documents as stored in the search index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product category.
///
/// Serialized in lowercase, which is also how it is stored in the index
/// (`keyword` field) and matched by `term` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Groceries,
    Electronics,
    Fashion,
    Toys,
    Books,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Groceries,
        Category::Electronics,
        Category::Fashion,
        Category::Toys,
        Category::Books,
    ];

    /// The lowercase name used on the wire and in the index.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Toys => "toys",
            Category::Books => "books",
        }
    }

    /// Product names that belong to this category.
    pub fn product_names(&self) -> &'static [&'static str] {
        match self {
            Category::Groceries => &["Rice", "Sugar", "Flour", "Pasta", "Oil"],
            Category::Electronics => &["Headphones", "Smartphone", "Tablet", "Laptop", "Monitor"],
            Category::Fashion => &["T-shirt", "Jeans", "Jacket", "Sneakers", "Hat"],
            Category::Toys => &["Action Figure", "Board Game", "Puzzle", "Toy Car", "Doll"],
            Category::Books => &["Novel", "Biography", "Textbook", "Comics", "Magazine"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability and price of a product in a single store.
///
/// Stored as a `nested` sub-document of [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub store_id: String,
    pub availability: bool,
    /// Price in the store, `0` when the product is not priced there.
    pub price: f64,
}

/// A catalog product document.
///
/// The SKU is assumed unique but nothing here enforces it; the search
/// engine assigns its own document ids on bulk indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// One record per store, in store order.
    pub stores: Vec<StoreRecord>,
}
