//! # Catalog Shared
//!
//! Types shared between the catalog API, the search repository and the
//! seeding tools: the indexed product document, the flattened API view and
//! the request parameters used to query the catalog.

mod product;
mod query;
mod view;

pub use product::{Category, Product, StoreRecord};
pub use query::{Pagination, PriceRange, ProductSearch, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use view::ProductView;
