//! Brand total aggregator: the single brand that is cheapest across a set of
//! categories.

use std::collections::{HashMap, HashSet};

use coordinate_catalog::{BrandName, Category, Price, Product};

use crate::error::{PricingError, PricingResult};
use crate::ranking::{self, CategoryPrice, Extremes};

/// One brand's cheapest price in each requested category, and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandTotal {
    pub brand: BrandName,
    /// Sorted by category name.
    pub categories: Vec<CategoryPrice>,
    pub total_price: u64,
}

/// Brands (ties included) with the lowest total over `categories`.
///
/// Only brands with a product in every requested category are eligible. A
/// brand listing several products in one category counts its cheapest.
pub fn cheapest_brand_total(categories: &[Category], products: &[Product]) -> PricingResult<Vec<BrandTotal>> {
    let requested = ranking::distinct_categories(categories);
    if requested.is_empty() {
        return Err(PricingError::invalid_argument("at least one category must be requested"));
    }
    if products.is_empty() {
        return Err(PricingError::not_found("no products registered in the catalog"));
    }

    let per_brand = min_price_by_brand(products.iter().filter(|p| requested.contains(&p.category())));

    let stocked: HashSet<Category> = per_brand.values().flat_map(|prices| prices.keys().copied()).collect();
    if let Some(missing) = requested.iter().find(|c| !stocked.contains(c)) {
        return Err(PricingError::not_found(format!(
            "no products registered in category {missing}"
        )));
    }

    let mut eligible = Vec::new();
    for (brand, prices) in &per_brand {
        if requested.iter().all(|c| prices.contains_key(c)) {
            eligible.push(total_for(brand, prices, &requested)?);
        }
    }

    let cheapest = Extremes::scan(eligible.into_iter().map(|bt| {
        let total = bt.total_price;
        (bt, total)
    }))
    .ok_or_else(|| {
        PricingError::no_eligible_brand(format!(
            "no brand carries every requested category: {}",
            ranking::category_list(&requested)
        ))
    })?;

    let (_, mut winners) = cheapest.into_min();
    winners.sort_by(|a, b| a.brand.cmp(&b.brand));
    Ok(winners)
}

/// [`cheapest_brand_total`] over every category.
pub fn cheapest_brand_total_all(products: &[Product]) -> PricingResult<Vec<BrandTotal>> {
    cheapest_brand_total(&Category::ALL, products)
}

/// Per-category minimums for one brand across every category it carries.
pub fn brand_breakdown(brand: &BrandName, products: &[Product]) -> PricingResult<BrandTotal> {
    let per_brand = min_price_by_brand(products.iter().filter(|p| p.brand() == brand));
    let prices = per_brand
        .get(brand)
        .ok_or_else(|| PricingError::not_found(format!("no products registered for brand {brand}")))?;

    let carried: Vec<Category> = Category::ALL.into_iter().filter(|c| prices.contains_key(c)).collect();
    total_for(brand, prices, &carried)
}

/// Brand → category → cheapest price of that brand in that category.
fn min_price_by_brand<'a>(
    products: impl Iterator<Item = &'a Product>,
) -> HashMap<&'a BrandName, HashMap<Category, Price>> {
    let mut per_brand: HashMap<&BrandName, HashMap<Category, Price>> = HashMap::new();
    for product in products {
        per_brand
            .entry(product.brand())
            .or_default()
            .entry(product.category())
            .and_modify(|price| *price = (*price).min(product.price()))
            .or_insert(product.price());
    }
    per_brand
}

fn total_for(
    brand: &BrandName,
    prices: &HashMap<Category, Price>,
    categories: &[Category],
) -> PricingResult<BrandTotal> {
    let mut breakdown = Vec::with_capacity(categories.len());
    let mut total_price: u64 = 0;
    for category in categories {
        let Some(price) = prices.get(category) else {
            continue;
        };
        total_price = total_price
            .checked_add(price.amount())
            .ok_or_else(|| PricingError::invalid_argument(format!("price total for brand {brand} overflows")))?;
        breakdown.push(CategoryPrice {
            category: *category,
            price: *price,
        });
    }
    ranking::sort_by_category_name(&mut breakdown);

    Ok(BrandTotal {
        brand: brand.clone(),
        categories: breakdown,
        total_price,
    })
}
