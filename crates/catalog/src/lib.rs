//! Catalog domain module.
//!
//! Brands, products and the fixed category set, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod brand;
pub mod category;
pub mod demo;
pub mod product;

pub use brand::{Brand, BrandName, RegisterBrand};
pub use category::Category;
pub use product::{Price, Product, ProductId, RegisterProduct};
