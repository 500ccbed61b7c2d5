use std::sync::Arc;

use coordinate_catalog::{BrandName, Category, Product};

/// Read-only view over the catalog that the aggregators run against.
///
/// Each call returns an owned snapshot; the aggregators never hold a lock on
/// the underlying store.
pub trait CatalogReader: Send + Sync {
    fn find_all_products(&self) -> Vec<Product>;
    fn find_products_by_category(&self, category: Category) -> Vec<Product>;
    fn find_products_by_brand(&self, brand: &BrandName) -> Vec<Product>;
}

impl<R> CatalogReader for Arc<R>
where
    R: CatalogReader + ?Sized,
{
    fn find_all_products(&self) -> Vec<Product> {
        (**self).find_all_products()
    }

    fn find_products_by_category(&self, category: Category) -> Vec<Product> {
        (**self).find_products_by_category(category)
    }

    fn find_products_by_brand(&self, brand: &BrandName) -> Vec<Product> {
        (**self).find_products_by_brand(brand)
    }
}

impl CatalogReader for Vec<Product> {
    fn find_all_products(&self) -> Vec<Product> {
        self.clone()
    }

    fn find_products_by_category(&self, category: Category) -> Vec<Product> {
        self.iter().filter(|p| p.category() == category).cloned().collect()
    }

    fn find_products_by_brand(&self, brand: &BrandName) -> Vec<Product> {
        self.iter().filter(|p| p.brand() == brand).cloned().collect()
    }
}
