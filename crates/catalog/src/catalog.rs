use storefront_core::{DomainError, DomainResult, find_by_id, find_by_id_mut};

use crate::product::Product;
use crate::seed;

/// Ordered collection of products.
///
/// The set of SKUs is fixed at construction; the only mutations are
/// [`Catalog::decrement_stock`] and [`Catalog::restock`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from seed records, keeping their order.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for (i, p) in products.iter().enumerate() {
            if products[..i].iter().any(|q| q.sku == p.sku) {
                return Err(DomainError::validation(format!("duplicate sku {}", p.sku)));
            }
            if p.name.trim().is_empty() {
                return Err(DomainError::validation(format!("product {} has no name", p.sku)));
            }
        }
        Ok(Self { products })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog seeded with [`seed::demo_products`].
    pub fn demo() -> DomainResult<Self> {
        Self::new(seed::demo_products()?)
    }

    /// All products in insertion order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Exact string match; no trimming or case folding.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        find_by_id(&self.products, sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.find_by_sku(sku).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn in_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_in_stock())
    }

    /// Take one unit of `sku` out of stock.
    ///
    /// Returns the product as it is after the decrement. On error nothing
    /// changes.
    pub fn decrement_stock(&mut self, sku: &str) -> DomainResult<&Product> {
        let product = self.find_mut(sku)?;
        if product.stock == 0 {
            return Err(DomainError::out_of_stock(product.name.clone()));
        }
        product.stock -= 1;
        Ok(product)
    }

    /// Add `quantity` units to `sku`. Quantity must be positive.
    pub fn restock(&mut self, sku: &str, quantity: u32) -> DomainResult<&Product> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        let product = self.find_mut(sku)?;
        product.stock = product
            .stock
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("stock would overflow"))?;
        tracing::info!(sku = %product.sku, stock = product.stock, "product restocked");
        Ok(product)
    }

    fn find_mut(&mut self, sku: &str) -> DomainResult<&mut Product> {
        find_by_id_mut(&mut self.products, sku)
            .ok_or_else(|| DomainError::not_found(format!("product {sku}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Sku;

    fn sample(sku: &str, stock: u32) -> Product {
        Product {
            sku: Sku::parse(sku).unwrap(),
            name: format!("Product {sku}"),
            storage: "64GB".to_string(),
            connectivity: "WiFi".to_string(),
            colour: "Grey".to_string(),
            stock,
        }
    }

    #[test]
    fn demo_catalog_has_three_products_in_seed_order() {
        let catalog = Catalog::demo().unwrap();
        let skus: Vec<_> = catalog.list_products().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(
            skus,
            vec!["APL-IPH15-256-BLK", "APL-IPAD-AIR-128-BLU", "APL-MBP-14-1TB-SLV"]
        );
        assert_eq!(catalog.find_by_sku("APL-IPH15-256-BLK").unwrap().stock, 5);
        assert_eq!(catalog.find_by_sku("APL-MBP-14-1TB-SLV").unwrap().stock, 0);
    }

    #[test]
    fn new_rejects_duplicate_skus() {
        let err = Catalog::new(vec![sample("A", 1), sample("A", 2)]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn find_by_sku_is_exact_match() {
        let catalog = Catalog::new(vec![sample("ABC", 1)]).unwrap();
        assert!(catalog.find_by_sku("ABC").is_some());
        assert!(catalog.find_by_sku("abc").is_none());
        assert!(catalog.find_by_sku("AB").is_none());
        assert!(catalog.find_by_sku(" ABC ").is_none());
    }

    #[test]
    fn padded_sku_cannot_be_decremented() {
        let mut catalog = Catalog::new(vec![sample("ABC", 1)]).unwrap();
        assert!(matches!(catalog.decrement_stock(" ABC "), Err(DomainError::NotFound(_))));
        assert_eq!(catalog.find_by_sku("ABC").unwrap().stock, 1);
    }

    #[test]
    fn decrement_stock_takes_exactly_one_unit() {
        let mut catalog = Catalog::new(vec![sample("A", 2)]).unwrap();
        let p = catalog.decrement_stock("A").unwrap();
        assert_eq!(p.stock, 1);
        assert_eq!(catalog.find_by_sku("A").unwrap().stock, 1);
    }

    #[test]
    fn decrement_stock_at_zero_reports_out_of_stock_and_changes_nothing() {
        let mut catalog = Catalog::new(vec![sample("A", 0)]).unwrap();
        let before = catalog.clone();
        let err = catalog.decrement_stock("A").unwrap_err();
        assert_eq!(err, DomainError::OutOfStock("Product A".to_string()));
        assert_eq!(catalog, before);
    }

    #[test]
    fn decrement_stock_on_unknown_sku_is_not_found() {
        let mut catalog = Catalog::new(vec![sample("A", 3)]).unwrap();
        let before = catalog.clone();
        assert!(matches!(catalog.decrement_stock("B"), Err(DomainError::NotFound(_))));
        assert_eq!(catalog, before);
    }

    #[test]
    fn restock_adds_units_and_rejects_zero() {
        let mut catalog = Catalog::new(vec![sample("A", 0)]).unwrap();
        assert_eq!(catalog.restock("A", 4).unwrap().stock, 4);
        assert!(matches!(catalog.restock("A", 0), Err(DomainError::Validation(_))));
        assert!(matches!(catalog.restock("Z", 1), Err(DomainError::NotFound(_))));
        assert_eq!(catalog.find_by_sku("A").unwrap().stock, 4);
    }

    #[test]
    fn in_stock_filters_empty_products() {
        let catalog = Catalog::new(vec![sample("A", 0), sample("B", 1)]).unwrap();
        let skus: Vec<_> = catalog.in_stock().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["B"]);
    }

    #[test]
    fn product_serializes_with_flat_fields() {
        let json = serde_json::to_value(sample("A", 2)).unwrap();
        assert_eq!(json["sku"], "A");
        assert_eq!(json["stock"], 2);
        assert_eq!(json["colour"], "Grey");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: stock decreases by one per successful decrement and
            /// never underflows, however many decrements are attempted.
            #[test]
            fn decrements_never_underflow(initial in 0u32..20, attempts in 0usize..40) {
                let mut catalog = Catalog::new(vec![sample("A", initial)]).unwrap();
                let mut succeeded = 0u32;
                for _ in 0..attempts {
                    if catalog.decrement_stock("A").is_ok() {
                        succeeded += 1;
                    }
                }
                prop_assert_eq!(succeeded, initial.min(attempts as u32));
                prop_assert_eq!(catalog.find_by_sku("A").unwrap().stock, initial - succeeded);
            }
        }
    }
}
