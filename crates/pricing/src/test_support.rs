//! Fixtures shared by the aggregator tests.

use coordinate_catalog::demo::demo_listings;
use coordinate_catalog::{BrandName, Category, Price, Product};
use proptest::prelude::*;

pub(crate) fn product(brand: &str, category: Category, price: u64) -> Product {
    Product::listed(BrandName::new(brand).unwrap(), category, Price::new(price).unwrap())
}

/// Nine brands, one product per category each.
pub(crate) fn demo_catalog() -> Vec<Product> {
    demo_listings()
        .map(|(brand, category, price)| product(brand, category, price))
        .collect()
}

/// Small catalogs over a handful of brands; categories may be missing and
/// prices collide often enough to exercise ties.
pub(crate) fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    let listing = (
        prop::sample::select(vec!["A", "B", "C", "D", "E"]),
        0usize..8,
        1u64..=20,
    )
        .prop_map(|(brand, idx, price)| product(brand, Category::ALL[idx], price * 100));
    prop::collection::vec(listing, 0..40)
}
