use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use coordinate_catalog::{BrandName, Category};
use coordinate_pricing::PricingError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/cheapest", get(cheapest_from_query).post(cheapest_from_body))
        .route("/:brand/prices", get(brand_prices))
}

pub async fn cheapest_from_query(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CategoriesQuery>,
) -> axum::response::Response {
    let categories = match query.categories.as_deref() {
        None => Category::ALL.to_vec(),
        Some(raw) => match Category::parse_list(raw) {
            Ok(list) => list,
            Err(e) => return errors::pricing_error_to_response(PricingError::from(e)),
        },
    };
    cheapest(&services, &categories)
}

pub async fn cheapest_from_body(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CheapestBrandRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let names = body.categories.unwrap_or_default();
    let categories = match dto::parse_categories(names.iter().map(String::as_str)) {
        Ok(list) => list,
        Err(resp) => return resp,
    };
    cheapest(&services, &categories)
}

fn cheapest(services: &AppServices, categories: &[Category]) -> axum::response::Response {
    if categories.is_empty() {
        return dto::empty_selection();
    }
    match services.queries.cheapest_brand_total(categories) {
        Ok(totals) => (StatusCode::OK, Json(dto::brand_totals_to_json(&totals))).into_response(),
        Err(e) => errors::pricing_error_to_response(e),
    }
}

pub async fn brand_prices(
    Extension(services): Extension<Arc<AppServices>>,
    Path(brand): Path<String>,
) -> axum::response::Response {
    let brand = match BrandName::new(&brand) {
        Ok(b) => b,
        Err(e) => return errors::pricing_error_to_response(PricingError::from(e)),
    };

    match services.queries.brand_breakdown(&brand) {
        Ok(total) => (StatusCode::OK, Json(dto::brand_total_to_json(&total))).into_response(),
        Err(e) => errors::pricing_error_to_response(e),
    }
}
