use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use coordinate_catalog::{Brand, BrandName, Category, Product, ProductId};
use coordinate_core::{DomainError, DomainResult, Entity};
use coordinate_pricing::CatalogReader;

use super::CatalogStore;

#[derive(Debug, Default)]
struct CatalogState {
    brands: BTreeMap<BrandName, Brand>,
    products: HashMap<ProductId, Product>,
}

impl CatalogState {
    fn check_listing(&self, product: &Product) -> DomainResult<()> {
        if !self.brands.contains_key(product.brand()) {
            return Err(DomainError::not_found(format!("brand {} is not registered", product.brand())));
        }
        let duplicate = self
            .products
            .values()
            .any(|existing| existing.id_typed() != product.id_typed() && existing.same_listing(product));
        if duplicate {
            return Err(DomainError::conflict(format!(
                "brand {} already lists a {} product at {}",
                product.brand(),
                product.category(),
                product.price()
            )));
        }
        Ok(())
    }

    fn sorted_products(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().filter(|p| keep(p)).cloned().collect();
        products.sort_by(|a, b| {
            a.brand()
                .cmp(b.brand())
                .then_with(|| a.category().as_str().cmp(b.category().as_str()))
                .then_with(|| a.price().cmp(&b.price()))
                .then_with(|| a.id_typed().cmp(&b.id_typed()))
        });
        products
    }
}

/// In-memory catalog for dev, tests and the demo server.
///
/// A poisoned lock is recovered rather than propagated: every mutation
/// validates before it writes, so the maps are consistent at any panic point.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogReader for InMemoryCatalogStore {
    fn find_all_products(&self) -> Vec<Product> {
        self.read().sorted_products(|_| true)
    }

    fn find_products_by_category(&self, category: Category) -> Vec<Product> {
        self.read().sorted_products(|p| p.category() == category)
    }

    fn find_products_by_brand(&self, brand: &BrandName) -> Vec<Product> {
        self.read().sorted_products(|p| p.brand() == brand)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn insert_brand(&self, brand: Brand) -> DomainResult<()> {
        let mut state = self.write();
        if state.brands.contains_key(brand.name()) {
            return Err(DomainError::conflict(format!("brand {} already exists", brand.name())));
        }
        state.brands.insert(brand.id().clone(), brand);
        Ok(())
    }

    fn remove_brand(&self, name: &BrandName) -> DomainResult<Vec<Product>> {
        let mut state = self.write();
        if state.brands.remove(name).is_none() {
            return Err(DomainError::not_found(format!("brand {name} is not registered")));
        }
        let ids: Vec<ProductId> = state
            .products
            .values()
            .filter(|p| p.brand() == name)
            .map(Product::id_typed)
            .collect();
        Ok(ids.into_iter().filter_map(|id| state.products.remove(&id)).collect())
    }

    fn get_brand(&self, name: &BrandName) -> Option<Brand> {
        self.read().brands.get(name).cloned()
    }

    fn list_brands(&self) -> Vec<Brand> {
        self.read().brands.values().cloned().collect()
    }

    fn insert_product(&self, product: Product) -> DomainResult<()> {
        let mut state = self.write();
        if state.products.contains_key(&product.id_typed()) {
            return Err(DomainError::conflict(format!("product {} already exists", product.id_typed())));
        }
        state.check_listing(&product)?;
        state.products.insert(*product.id(), product);
        Ok(())
    }

    fn replace_product(&self, product: Product) -> DomainResult<()> {
        let mut state = self.write();
        if !state.products.contains_key(&product.id_typed()) {
            return Err(DomainError::not_found(format!("product {} not found", product.id_typed())));
        }
        state.check_listing(&product)?;
        state.products.insert(*product.id(), product);
        Ok(())
    }

    fn remove_product(&self, id: ProductId) -> DomainResult<Product> {
        self.write()
            .products
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} not found")))
    }

    fn get_product(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }
}
