use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use coordinate_catalog::{Brand, Category, Product, RegisterBrand, RegisterProduct};
use coordinate_core::DomainError;
use coordinate_pricing::{BrandPrice, BrandTotal, CategoryPriceSummary, LowestPriceOverview, PricingError};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// `?categories=TOP,OUTER`; absent means every category.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    pub categories: Option<String>,
}

/// `{"categories": [...]}`; a missing or null list is an empty selection.
#[derive(Debug, Default, Deserialize)]
pub struct CheapestBrandRequest {
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterBrandRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub brand: String,
    pub category: String,
    pub price: i64,
}

impl From<RegisterBrandRequest> for RegisterBrand {
    fn from(value: RegisterBrandRequest) -> Self {
        RegisterBrand { name: value.name }
    }
}

impl TryFrom<ProductRequest> for RegisterProduct {
    type Error = DomainError;

    fn try_from(value: ProductRequest) -> Result<Self, Self::Error> {
        let category: Category = value.category.parse()?;
        let price = u64::try_from(value.price).map_err(|_| DomainError::validation("price must be positive"))?;
        Ok(RegisterProduct {
            brand: value.brand,
            category,
            price,
        })
    }
}

/// Parse category names from a query or body into a request list.
pub fn parse_categories<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Category>, axum::response::Response> {
    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Category>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| errors::pricing_error_to_response(PricingError::from(e)))
}

pub fn parse_category(raw: &str) -> Result<Category, axum::response::Response> {
    raw.parse::<Category>()
        .map_err(|e| errors::pricing_error_to_response(PricingError::from(e)))
}

pub fn empty_selection() -> axum::response::Response {
    errors::json_error(
        StatusCode::BAD_REQUEST,
        "invalid_argument",
        "at least one category must be requested",
    )
}

// -------------------------
// Response mapping
// -------------------------

fn brand_prices_to_json(prices: &[BrandPrice]) -> serde_json::Value {
    prices
        .iter()
        .map(|bp| json!({ "brand": bp.brand.as_str(), "price": bp.price.amount() }))
        .collect()
}

pub fn lowest_prices_to_json(overview: LowestPriceOverview) -> serde_json::Value {
    json!({
        "categories": overview
            .categories
            .iter()
            .map(|s| json!({
                "category": s.category.as_str(),
                "brandPrices": brand_prices_to_json(&s.lowest),
            }))
            .collect::<Vec<_>>(),
        "totalPrice": overview.total_price,
    })
}

pub fn price_range_to_json(summary: CategoryPriceSummary) -> serde_json::Value {
    json!({
        "category": summary.category.as_str(),
        "lowestPrices": brand_prices_to_json(&summary.lowest),
        "highestPrices": brand_prices_to_json(&summary.highest),
    })
}

pub fn brand_total_to_json(total: &BrandTotal) -> serde_json::Value {
    json!({
        "brand": total.brand.as_str(),
        "totalPrice": total.total_price,
        "categories": total
            .categories
            .iter()
            .map(|cp| json!({ "category": cp.category.as_str(), "price": cp.price.amount() }))
            .collect::<Vec<_>>(),
    })
}

pub fn brand_totals_to_json(totals: &[BrandTotal]) -> serde_json::Value {
    json!({
        "brandTotals": totals.iter().map(brand_total_to_json).collect::<Vec<_>>(),
    })
}

pub fn brand_to_json(brand: &Brand) -> serde_json::Value {
    json!({
        "name": brand.name().as_str(),
        "registeredAt": brand.registered_at().to_rfc3339(),
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id_typed().to_string(),
        "brand": product.brand().as_str(),
        "category": product.category().as_str(),
        "price": product.price().amount(),
        "registeredAt": product.registered_at().to_rfc3339(),
        "updatedAt": product.updated_at().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_null_selection_deserializes_as_none() {
        let missing: CheapestBrandRequest = serde_json::from_str("{}").unwrap();
        let null: CheapestBrandRequest = serde_json::from_str(r#"{"categories": null}"#).unwrap();
        assert!(missing.categories.is_none());
        assert!(null.categories.is_none());
    }

    #[test]
    fn negative_price_is_a_validation_error() {
        let err = RegisterProduct::try_from(ProductRequest {
            brand: "A".to_string(),
            category: "top".to_string(),
            price: -5,
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn product_request_parses_category_case_insensitively() {
        let cmd = RegisterProduct::try_from(ProductRequest {
            brand: "A".to_string(),
            category: "Sneakers".to_string(),
            price: 9000,
        })
        .unwrap();
        assert_eq!(cmd.category, Category::Sneakers);
    }

    #[test]
    fn blank_entries_in_category_list_are_skipped() {
        let categories = parse_categories("TOP, ,outer".split(',')).unwrap();
        assert_eq!(categories, vec![Category::Top, Category::Outer]);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let response = parse_categories(["TOP", "CAPE"]).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
