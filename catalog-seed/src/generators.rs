//! Synthetic catalog generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use catalog_shared::{Category, Product, StoreRecord};

/// Number of products generated by default.
pub const DEFAULT_PRODUCT_COUNT: usize = 10_000;

/// Number of stores generated by default.
pub const DEFAULT_STORE_COUNT: usize = 50;

const MIN_PRICE: f64 = 5.0;
const MAX_PRICE: f64 = 500.0;

/// Store ids `store1` through `store{count}`.
pub fn store_ids(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("store{}", i)).collect()
}

/// SKU for the n-th product, zero padded to five digits.
pub fn sku(n: usize) -> String {
    format!("SKU{:05}", n)
}

fn describe(name: &str, category: Category) -> String {
    format!(
        "A high-quality {} in the {} category.",
        name.to_lowercase(),
        category
    )
}

/// Uniform price in [5, 500], rounded to cents.
fn random_price(rng: &mut StdRng) -> f64 {
    let price: f64 = rng.gen_range(MIN_PRICE..=MAX_PRICE);
    (price * 100.0).round() / 100.0
}

/// Generates products listing every store with random availability and price.
pub struct CatalogGenerator {
    rng: StdRng,
    store_ids: Vec<String>,
}

impl CatalogGenerator {
    /// Create a generator for `store_count` stores.
    ///
    /// With a seed the output is reproducible; without one the generator is
    /// seeded from the OS.
    pub fn new(store_count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            store_ids: store_ids(store_count),
        }
    }

    fn generate_stores(&mut self) -> Vec<StoreRecord> {
        let rng = &mut self.rng;
        self.store_ids
            .iter()
            .map(|store_id| {
                let availability = rng.gen_bool(0.5);
                // Half of the records are unpriced
                let price = if rng.gen_bool(0.5) {
                    random_price(rng)
                } else {
                    0.0
                };
                StoreRecord {
                    store_id: store_id.clone(),
                    availability,
                    price,
                }
            })
            .collect()
    }

    /// Generate the product with the given 1-based number.
    pub fn generate_product(&mut self, number: usize) -> Product {
        let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];
        let names = category.product_names();
        let name = names[self.rng.gen_range(0..names.len())];

        Product {
            sku: sku(number),
            name: name.to_string(),
            category,
            description: describe(name, category),
            stores: self.generate_stores(),
        }
    }

    /// Generate products `1..=count`.
    pub fn generate(&mut self, count: usize) -> Vec<Product> {
        (1..=count).map(|n| self.generate_product(n)).collect()
    }
}
