//! Catalog storage: brands and their products.

pub mod in_memory;

use std::sync::Arc;

use coordinate_catalog::{Brand, BrandName, Product, ProductId};
use coordinate_core::DomainResult;
use coordinate_pricing::CatalogReader;

pub use in_memory::InMemoryCatalogStore;

/// Write side of the catalog.
///
/// Implementations run each check together with its mutation, so two
/// concurrent writers cannot both pass a uniqueness check.
pub trait CatalogStore: CatalogReader {
    /// `Conflict` if a brand with the same name exists.
    fn insert_brand(&self, brand: Brand) -> DomainResult<()>;
    /// Remove a brand and every product it lists; returns the removed products.
    fn remove_brand(&self, name: &BrandName) -> DomainResult<Vec<Product>>;
    fn get_brand(&self, name: &BrandName) -> Option<Brand>;
    /// Sorted by name.
    fn list_brands(&self) -> Vec<Brand>;

    /// `NotFound` if the brand is unknown, `Conflict` on a duplicate listing.
    fn insert_product(&self, product: Product) -> DomainResult<()>;
    /// Same rules as insert, ignoring the product being replaced.
    fn replace_product(&self, product: Product) -> DomainResult<()>;
    fn remove_product(&self, id: ProductId) -> DomainResult<Product>;
    fn get_product(&self, id: ProductId) -> Option<Product>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn insert_brand(&self, brand: Brand) -> DomainResult<()> {
        (**self).insert_brand(brand)
    }

    fn remove_brand(&self, name: &BrandName) -> DomainResult<Vec<Product>> {
        (**self).remove_brand(name)
    }

    fn get_brand(&self, name: &BrandName) -> Option<Brand> {
        (**self).get_brand(name)
    }

    fn list_brands(&self) -> Vec<Brand> {
        (**self).list_brands()
    }

    fn insert_product(&self, product: Product) -> DomainResult<()> {
        (**self).insert_product(product)
    }

    fn replace_product(&self, product: Product) -> DomainResult<()> {
        (**self).replace_product(product)
    }

    fn remove_product(&self, id: ProductId) -> DomainResult<Product> {
        (**self).remove_product(id)
    }

    fn get_product(&self, id: ProductId) -> Option<Product> {
        (**self).get_product(id)
    }
}
