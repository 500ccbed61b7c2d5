use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};

use coordinate_catalog::{BrandName, ProductId, RegisterProduct};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/brands", get(list_brands).post(register_brand))
        .route("/brands/:brand", delete(remove_brand))
        .route("/products", get(list_products).post(register_product))
        .route("/products/:id", put(update_product).delete(remove_product))
}

pub async fn list_brands(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items: Vec<_> = services.admin.list_brands().iter().map(dto::brand_to_json).collect();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn register_brand(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RegisterBrandRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.admin.register_brand(body.into()) {
        Ok(brand) => (StatusCode::CREATED, Json(dto::brand_to_json(&brand))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_brand(
    Extension(services): Extension<Arc<AppServices>>,
    Path(brand): Path<String>,
) -> axum::response::Response {
    let result = BrandName::new(&brand).and_then(|name| services.admin.remove_brand(&name));
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items: Vec<_> = services.admin.list_products().iter().map(dto::product_to_json).collect();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn register_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let result = RegisterProduct::try_from(body).and_then(|cmd| services.admin.register_product(cmd));
    match result {
        Ok(product) => (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    let result = RegisterProduct::try_from(body).and_then(|cmd| services.admin.update_product(id, cmd));
    match result {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    match services.admin.remove_product(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
