use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::warn;

use coordinate_core::DomainError;
use coordinate_pricing::PricingError;

pub fn pricing_error_to_response(err: PricingError) -> axum::response::Response {
    warn!(error = err.kind(), message = err.message(), "price query failed");
    let status = match err {
        PricingError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        PricingError::NotFound(_) => StatusCode::NOT_FOUND,
        PricingError::NoEligibleBrand(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    json_error(status, err.kind(), err.message())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    warn!(error = err.code(), "catalog command failed: {err}");
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// Malformed or mistyped request bodies get the same JSON error shape as
/// every other failure.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    warn!(error = "invalid_argument", "request body rejected: {rejection}");
    json_error(StatusCode::BAD_REQUEST, "invalid_argument", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
