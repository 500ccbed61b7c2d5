//! `coordinate-pricing`
//!
//! **Responsibility:** price aggregation over a catalog snapshot.
//!
//! - The aggregators in [`category`] and [`brand_total`] are pure functions
//!   over `&[Product]`; they never touch storage.
//! - [`PriceQueries`] pulls a snapshot through a [`CatalogReader`] and runs
//!   them, so any store can sit behind the service.
//! - Ties are never broken: every brand sharing an extreme price or a minimum
//!   total is reported, sorted by name.

pub mod brand_total;
pub mod category;
pub mod error;
pub mod queries;
pub mod ranking;
pub mod reader;

#[cfg(test)]
pub(crate) mod test_support;

pub use brand_total::{brand_breakdown, cheapest_brand_total, cheapest_brand_total_all, BrandTotal};
pub use category::{lowest_prices, lowest_prices_for, price_range, CategoryPriceSummary, LowestPriceOverview};
pub use error::{PricingError, PricingResult};
pub use queries::PriceQueries;
pub use ranking::{BrandPrice, CategoryPrice};
pub use reader::CatalogReader;
