use serde::Serialize;

use storefront_core::{Entity, Sku};

/// A sellable product and its current stock.
///
/// `sku` never changes after construction; `stock` is unsigned so it can never
/// drop below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub storage: String,
    pub connectivity: String,
    pub colour: String,
    pub stock: u32,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}
