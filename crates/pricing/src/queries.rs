use coordinate_catalog::{BrandName, Category};
use tracing::{debug, instrument, warn};

use crate::brand_total::{self, BrandTotal};
use crate::category::{self, CategoryPriceSummary, LowestPriceOverview};
use crate::error::PricingResult;
use crate::reader::CatalogReader;

/// Query service: takes a snapshot from the reader per call and runs the
/// pure aggregators over it.
#[derive(Debug, Clone)]
pub struct PriceQueries<R> {
    reader: R,
}

impl<R: CatalogReader> PriceQueries<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Lowest/highest price and brands in one category.
    #[instrument(skip(self), fields(category = %category), err)]
    pub fn price_range(&self, category: Category) -> PricingResult<CategoryPriceSummary> {
        let snapshot = self.reader.find_products_by_category(category);
        debug!(products = snapshot.len(), "category snapshot loaded");

        let summary = category::price_range(category, &snapshot)?;
        debug!(
            lowest = summary.lowest.len(),
            highest = summary.highest.len(),
            "price range computed"
        );
        Ok(summary)
    }

    /// Minimum price per category across every category, and their sum.
    #[instrument(skip(self), err)]
    pub fn lowest_prices(&self) -> PricingResult<LowestPriceOverview> {
        let snapshot = self.reader.find_all_products();
        let overview = category::lowest_prices(&snapshot)?;
        debug!(total_price = overview.total_price, "lowest prices computed");
        Ok(overview)
    }

    /// Cheapest single brand (ties included) over `categories`.
    #[instrument(skip(self), err)]
    pub fn cheapest_brand_total(&self, categories: &[Category]) -> PricingResult<Vec<BrandTotal>> {
        let snapshot = self.reader.find_all_products();
        let result = brand_total::cheapest_brand_total(categories, &snapshot);
        match &result {
            Ok(totals) => debug!(brands = totals.len(), "cheapest brand total computed"),
            Err(err) => warn!(kind = err.kind(), "cheapest brand total unavailable"),
        }
        result
    }

    /// [`PriceQueries::cheapest_brand_total`] over every category.
    pub fn cheapest_brand_total_all(&self) -> PricingResult<Vec<BrandTotal>> {
        self.cheapest_brand_total(&Category::ALL)
    }

    /// One brand's minimum price per carried category, and their sum.
    #[instrument(skip(self), fields(brand = %brand), err)]
    pub fn brand_breakdown(&self, brand: &BrandName) -> PricingResult<BrandTotal> {
        let snapshot = self.reader.find_products_by_brand(brand);
        brand_total::brand_breakdown(brand, &snapshot)
    }
}
