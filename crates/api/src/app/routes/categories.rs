use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/lowest-prices", get(lowest_prices))
        .route("/:category/price-range", get(price_range))
}

pub async fn lowest_prices(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.queries.lowest_prices() {
        Ok(overview) => (StatusCode::OK, Json(dto::lowest_prices_to_json(overview))).into_response(),
        Err(e) => errors::pricing_error_to_response(e),
    }
}

pub async fn price_range(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category = match dto::parse_category(&category) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match services.queries.price_range(category) {
        Ok(summary) => (StatusCode::OK, Json(dto::price_range_to_json(summary))).into_response(),
        Err(e) => errors::pricing_error_to_response(e),
    }
}
