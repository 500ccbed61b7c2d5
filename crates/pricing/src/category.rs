//! Category aggregator: lowest and highest price per category.

use std::collections::HashMap;

use coordinate_catalog::{BrandName, Category, Price, Product};

use crate::error::{PricingError, PricingResult};
use crate::ranking::{self, BrandPrice, Extremes};

/// Lowest and highest price in one category, with every brand at each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPriceSummary {
    pub category: Category,
    pub lowest_price: Price,
    pub highest_price: Price,
    /// Brands at `lowest_price`, sorted by name.
    pub lowest: Vec<BrandPrice>,
    /// Brands at `highest_price`, sorted by name.
    pub highest: Vec<BrandPrice>,
}

/// Per-category minimums and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowestPriceOverview {
    /// One entry per requested category, sorted by category name.
    pub categories: Vec<CategoryPriceSummary>,
    /// Sum of each category's minimum price (counted once per category).
    pub total_price: u64,
}

/// Lowest/highest price and brands for `category`.
///
/// Products of other categories in `products` are ignored, so both a
/// per-category and a full snapshot are valid input.
pub fn price_range(category: Category, products: &[Product]) -> PricingResult<CategoryPriceSummary> {
    let extremes = Extremes::scan(
        products
            .iter()
            .filter(|p| p.category() == category)
            .map(|p| (p.brand(), p.price())),
    )
    .ok_or_else(|| missing_category(category))?;

    Ok(summarize(category, &extremes))
}

/// Per-category minimum across every category, plus the sum of minimums.
///
/// Every category must have at least one product.
pub fn lowest_prices(products: &[Product]) -> PricingResult<LowestPriceOverview> {
    lowest_prices_for(&Category::ALL, products)
}

/// Per-category minimum for the requested categories, plus the sum of minimums.
pub fn lowest_prices_for(categories: &[Category], products: &[Product]) -> PricingResult<LowestPriceOverview> {
    let requested = ranking::distinct_categories(categories);
    if requested.is_empty() {
        return Err(PricingError::invalid_argument("at least one category must be requested"));
    }

    let mut by_category: HashMap<Category, Extremes<&BrandName, Price>> = HashMap::new();
    for product in products {
        if !requested.contains(&product.category()) {
            continue;
        }
        by_category
            .entry(product.category())
            .and_modify(|extremes| extremes.observe(product.brand(), product.price()))
            .or_insert_with(|| Extremes::start(product.brand(), product.price()));
    }

    let mut summaries = Vec::with_capacity(requested.len());
    let mut total_price: u64 = 0;
    for category in requested {
        let extremes = by_category.get(&category).ok_or_else(|| missing_category(category))?;
        total_price = total_price
            .checked_add(extremes.min().amount())
            .ok_or_else(|| PricingError::invalid_argument("sum of lowest prices overflows"))?;
        summaries.push(summarize(category, extremes));
    }
    summaries.sort_by_key(|s| s.category.as_str());

    Ok(LowestPriceOverview {
        categories: summaries,
        total_price,
    })
}

fn summarize(category: Category, extremes: &Extremes<&BrandName, Price>) -> CategoryPriceSummary {
    let collect = |brands: &[&BrandName], price: Price| {
        ranking::sort_by_brand(
            brands
                .iter()
                .map(|brand| BrandPrice {
                    brand: (*brand).clone(),
                    price,
                })
                .collect(),
        )
    };

    CategoryPriceSummary {
        category,
        lowest_price: extremes.min(),
        highest_price: extremes.max(),
        lowest: collect(extremes.at_min(), extremes.min()),
        highest: collect(extremes.at_max(), extremes.max()),
    }
}

fn missing_category(category: Category) -> PricingError {
    PricingError::not_found(format!("no products registered in category {category}"))
}
