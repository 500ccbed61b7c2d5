//! Infrastructure layer: catalog storage, administration and seed data.

pub mod admin;
pub mod catalog_store;
pub mod seed;

pub use admin::CatalogAdmin;
pub use catalog_store::{CatalogStore, InMemoryCatalogStore};
