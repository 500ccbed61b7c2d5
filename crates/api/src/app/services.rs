use std::sync::Arc;

use coordinate_core::DomainResult;
use coordinate_infra::{seed, CatalogAdmin, InMemoryCatalogStore};
use coordinate_pricing::PriceQueries;

use crate::config::CatalogSeed;

/// Services shared by every handler. Admin writes and price queries go
/// through the same store.
#[derive(Debug)]
pub struct AppServices {
    pub admin: CatalogAdmin<Arc<InMemoryCatalogStore>>,
    pub queries: PriceQueries<Arc<InMemoryCatalogStore>>,
}

pub fn build_services(seed: CatalogSeed) -> DomainResult<AppServices> {
    let store = Arc::new(InMemoryCatalogStore::new());
    let services = AppServices {
        admin: CatalogAdmin::new(Arc::clone(&store)),
        queries: PriceQueries::new(store),
    };

    if seed == CatalogSeed::Demo {
        seed::load_demo(&services.admin)?;
    }

    Ok(services)
}
