use storefront_catalog::Catalog;
use storefront_core::DomainResult;
use storefront_infra::ShopService;

use crate::config::SeedMode;

/// Everything the handlers share. One instance per process.
#[derive(Debug)]
pub struct AppServices {
    shop: ShopService,
}

impl AppServices {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            shop: ShopService::new(catalog),
        }
    }

    pub fn shop(&self) -> &ShopService {
        &self.shop
    }
}

pub fn build_services(seed: SeedMode) -> DomainResult<AppServices> {
    let catalog = match seed {
        SeedMode::Demo => Catalog::demo()?,
        SeedMode::Empty => Catalog::empty(),
    };
    tracing::info!(products = catalog.len(), ?seed, "catalog seeded");
    Ok(AppServices::new(catalog))
}
