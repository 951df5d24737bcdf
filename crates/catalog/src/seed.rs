//! Demo catalog loaded at startup.

use storefront_core::{DomainResult, Sku};

use crate::product::Product;

fn product(
    sku: &str,
    name: &str,
    storage: &str,
    connectivity: &str,
    colour: &str,
    stock: u32,
) -> DomainResult<Product> {
    Ok(Product {
        sku: Sku::parse(sku)?,
        name: name.to_string(),
        storage: storage.to_string(),
        connectivity: connectivity.to_string(),
        colour: colour.to_string(),
        stock,
    })
}

/// The three Apple products the service ships with.
pub fn demo_products() -> DomainResult<Vec<Product>> {
    Ok(vec![
        product("APL-IPH15-256-BLK", "iPhone 15 Pro", "256GB", "5G", "Space Black", 5)?,
        product("APL-IPAD-AIR-128-BLU", "iPad Air", "128GB", "WiFi + Cellular", "Blue", 3)?,
        product("APL-MBP-14-1TB-SLV", "MacBook Pro", "1TB", "WiFi", "Silver", 0)?,
    ])
}
