//! Request parameters for catalog queries.

use serde::{Deserialize, Serialize};

/// Default 1-based page number.
pub const DEFAULT_PAGE: usize = 1;

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Page selection for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: usize,
    /// Maximum number of products on the page.
    #[serde(default = "default_size")]
    pub size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Offset of the first product on this page (`from` in the search body).
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

/// Inclusive price bounds. Either bound may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Body of a filtered product search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearch {
    pub store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

impl ProductSearch {
    /// Create a search for available products in a store, first page.
    pub fn in_store(store_id: impl Into<String>) -> Self {
        Self {
            store_id: store_id.into(),
            category: None,
            price_range: None,
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = Some(price_range);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.page = pagination.page;
        self.size = pagination.size;
        self
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.size)
    }
}
