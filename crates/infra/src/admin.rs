//! Catalog administration: brand and product registration.

use chrono::Utc;
use tracing::{info, instrument};

use coordinate_catalog::{Brand, BrandName, Product, ProductId, RegisterBrand, RegisterProduct};
use coordinate_core::{DomainError, DomainResult};

use crate::catalog_store::CatalogStore;

/// Validates admin commands and applies them to a [`CatalogStore`].
///
/// Command validation happens in the catalog types; existence and duplicate
/// checks happen atomically inside the store.
#[derive(Debug, Clone)]
pub struct CatalogAdmin<S> {
    store: S,
}

impl<S: CatalogStore> CatalogAdmin<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self), fields(brand = %cmd.name), err)]
    pub fn register_brand(&self, cmd: RegisterBrand) -> DomainResult<Brand> {
        let brand = Brand::register(&cmd, Utc::now())?;
        self.store.insert_brand(brand.clone())?;
        info!("brand registered");
        Ok(brand)
    }

    /// Remove a brand together with its products.
    #[instrument(skip(self), fields(brand = %name), err)]
    pub fn remove_brand(&self, name: &BrandName) -> DomainResult<()> {
        let removed = self.store.remove_brand(name)?;
        info!(products_removed = removed.len(), "brand removed");
        Ok(())
    }

    pub fn list_brands(&self) -> Vec<Brand> {
        self.store.list_brands()
    }

    #[instrument(skip(self), fields(brand = %cmd.brand, category = %cmd.category, price = cmd.price), err)]
    pub fn register_product(&self, cmd: RegisterProduct) -> DomainResult<Product> {
        let product = Product::register(ProductId::generate(), &cmd, Utc::now())?;
        self.store.insert_product(product.clone())?;
        info!(product_id = %product.id_typed(), "product registered");
        Ok(product)
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    pub fn update_product(&self, id: ProductId, cmd: RegisterProduct) -> DomainResult<Product> {
        let current = self
            .store
            .get_product(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} not found")))?;
        let revised = current.revise(&cmd, Utc::now())?;
        self.store.replace_product(revised.clone())?;
        info!("product updated");
        Ok(revised)
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    pub fn remove_product(&self, id: ProductId) -> DomainResult<()> {
        self.store.remove_product(id)?;
        info!("product removed");
        Ok(())
    }

    /// Sorted by brand, category name, then price.
    pub fn list_products(&self) -> Vec<Product> {
        self.store.find_all_products()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use coordinate_catalog::Category;

    use super::*;
    use crate::catalog_store::InMemoryCatalogStore;

    fn admin() -> CatalogAdmin<Arc<InMemoryCatalogStore>> {
        CatalogAdmin::new(Arc::new(InMemoryCatalogStore::new()))
    }

    fn brand_cmd(name: &str) -> RegisterBrand {
        RegisterBrand { name: name.to_string() }
    }

    fn product_cmd(brand: &str, category: Category, price: u64) -> RegisterProduct {
        RegisterProduct {
            brand: brand.to_string(),
            category,
            price,
        }
    }

    #[test]
    fn register_brand_trims_and_rejects_duplicates() {
        let admin = admin();
        let brand = admin.register_brand(brand_cmd("  A ")).unwrap();
        assert_eq!(brand.name().as_str(), "A");

        let err = admin.register_brand(brand_cmd("A")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn register_brand_rejects_blank_name() {
        let err = admin().register_brand(brand_cmd("   ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn register_product_requires_existing_brand_and_positive_price() {
        let admin = admin();
        admin.register_brand(brand_cmd("A")).unwrap();

        assert!(matches!(
            admin.register_product(product_cmd("B", Category::Top, 100)),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            admin.register_product(product_cmd("A", Category::Top, 0)),
            Err(DomainError::Validation(_))
        ));

        let product = admin.register_product(product_cmd("A", Category::Top, 100)).unwrap();
        assert_eq!(admin.list_products(), vec![product]);
    }

    #[test]
    fn update_product_keeps_id_and_checks_duplicates() {
        let admin = admin();
        admin.register_brand(brand_cmd("A")).unwrap();
        let first = admin.register_product(product_cmd("A", Category::Top, 100)).unwrap();
        let second = admin.register_product(product_cmd("A", Category::Top, 200)).unwrap();

        let err = admin
            .update_product(second.id_typed(), product_cmd("A", Category::Top, 100))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let updated = admin
            .update_product(first.id_typed(), product_cmd("A", Category::Outer, 5000))
            .unwrap();
        assert_eq!(updated.id_typed(), first.id_typed());
        assert_eq!(updated.category(), Category::Outer);
        assert_eq!(updated.registered_at(), first.registered_at());
    }

    #[test]
    fn update_product_to_unknown_brand_is_not_found() {
        let admin = admin();
        admin.register_brand(brand_cmd("A")).unwrap();
        let product = admin.register_product(product_cmd("A", Category::Top, 100)).unwrap();

        let err = admin
            .update_product(product.id_typed(), product_cmd("Z", Category::Top, 100))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn update_or_remove_missing_product_is_not_found() {
        let admin = admin();
        let id = ProductId::generate();
        assert!(matches!(
            admin.update_product(id, product_cmd("A", Category::Top, 100)),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(admin.remove_product(id), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn remove_brand_removes_its_products() {
        let admin = admin();
        admin.register_brand(brand_cmd("A")).unwrap();
        admin.register_brand(brand_cmd("B")).unwrap();
        admin.register_product(product_cmd("A", Category::Top, 100)).unwrap();
        admin.register_product(product_cmd("B", Category::Top, 100)).unwrap();

        admin.remove_brand(&BrandName::new("A").unwrap()).unwrap();

        assert_eq!(admin.list_brands().len(), 1);
        let products = admin.list_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].brand().as_str(), "B");
    }
}
