//! Demo catalog: nine brands, one product per brand and category.

use tracing::info;

use coordinate_catalog::demo::DEMO_PRICES;
use coordinate_catalog::{Category, RegisterBrand, RegisterProduct};
use coordinate_core::DomainResult;

use crate::admin::CatalogAdmin;
use crate::catalog_store::CatalogStore;

/// Register the demo brands and products through `admin`.
///
/// Fails with `Conflict` if any demo brand is already registered.
pub fn load_demo<S: CatalogStore>(admin: &CatalogAdmin<S>) -> DomainResult<()> {
    for (brand, prices) in DEMO_PRICES {
        admin.register_brand(RegisterBrand { name: brand.to_string() })?;
        for (category, price) in Category::ALL.into_iter().zip(prices) {
            admin.register_product(RegisterProduct {
                brand: brand.to_string(),
                category,
                price,
            })?;
        }
    }
    info!(brands = DEMO_PRICES.len(), "demo catalog loaded");
    Ok(())
}
