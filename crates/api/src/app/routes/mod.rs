use axum::Router;

pub mod admin;
pub mod brands;
pub mod categories;
pub mod system;

/// Router for every catalog and pricing endpoint.
pub fn router() -> Router {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/brands", brands::router())
        .nest("/admin", admin::router())
}
