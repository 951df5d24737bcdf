//! The shop's shared mutable state.
//!
//! Catalog, order ledger and review store live together in one [`ShopState`]
//! behind a single mutex. Every operation holds the lock for its whole
//! duration, so an order's stock check, decrement and append are one step as
//! seen by concurrent callers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rand::Rng;

use storefront_catalog::{Catalog, Product};
use storefront_core::{DomainError, DomainResult, OrderId};
use storefront_orders::{Order, OrderLedger, PlaceOrder, pick_surprise};
use storefront_reviews::{AddReview, ProductReviews, ReviewStore, ReviewSummary};

use crate::projections::stats::ShopStats;

/// Catalog + ledger + reviews.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopState {
    pub catalog: Catalog,
    pub ledger: OrderLedger,
    pub reviews: ReviewStore,
}

impl ShopState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: OrderLedger::new(),
            reviews: ReviewStore::new(),
        }
    }
}

/// Handle to the shop state, shared across request handlers.
#[derive(Debug, Default)]
pub struct ShopService {
    state: Mutex<ShopState>,
}

impl ShopService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: Mutex::new(ShopState::new(catalog)),
        }
    }

    // Every mutation validates before it writes, so a panic while the lock is
    // held cannot leave the state half-updated.
    fn lock(&self) -> MutexGuard<'_, ShopState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.lock().catalog.list_products().to_vec()
    }

    pub fn get_product(&self, sku: &str) -> DomainResult<Product> {
        self.lock()
            .catalog
            .find_by_sku(sku)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product {sku}")))
    }

    pub fn restock(&self, sku: &str, quantity: u32) -> DomainResult<Product> {
        self.lock().catalog.restock(sku, quantity).cloned()
    }

    pub fn create_order(&self, cmd: PlaceOrder) -> DomainResult<Order> {
        let mut guard = self.lock();
        let ShopState { catalog, ledger, .. } = &mut *guard;
        ledger.create_order(catalog, cmd).cloned()
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.lock().ledger.list_orders().to_vec()
    }

    pub fn get_order(&self, id: OrderId) -> DomainResult<Order> {
        self.lock().ledger.get_order(id).cloned()
    }

    pub fn add_review(&self, cmd: AddReview) -> DomainResult<ReviewSummary> {
        let mut guard = self.lock();
        let ShopState { catalog, reviews, .. } = &mut *guard;
        reviews.add_review(catalog, cmd)
    }

    pub fn get_reviews(&self, sku: &str) -> DomainResult<ProductReviews> {
        let guard = self.lock();
        guard.reviews.get_reviews(&guard.catalog, sku)
    }

    /// Order a random in-stock product using the thread-local RNG.
    pub fn surprise_order(&self, customer_name: Option<&str>, placed_at: DateTime<Utc>) -> DomainResult<Order> {
        self.surprise_order_with(customer_name, placed_at, &mut rand::thread_rng())
    }

    pub fn surprise_order_with<R>(
        &self,
        customer_name: Option<&str>,
        placed_at: DateTime<Utc>,
        rng: &mut R,
    ) -> DomainResult<Order>
    where
        R: Rng + ?Sized,
    {
        let mut guard = self.lock();
        let ShopState { catalog, ledger, .. } = &mut *guard;
        let result = pick_surprise(catalog, ledger, customer_name, placed_at, rng).cloned();
        if let Err(DomainError::NoStock) = &result {
            tracing::warn!("surprise order requested but nothing is in stock");
        }
        result
    }

    pub fn stats(&self) -> ShopStats {
        let guard = self.lock();
        ShopStats::compute(&guard.catalog, &guard.ledger, &guard.reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service() -> ShopService {
        ShopService::new(Catalog::demo().unwrap())
    }

    fn order(sku: &str, customer: &str) -> PlaceOrder {
        PlaceOrder::parse(Some(sku), Some(customer), Utc::now()).unwrap()
    }

    #[test]
    fn create_order_scenario_alma() {
        let shop = service();
        let placed = shop.create_order(order("APL-IPH15-256-BLK", "Alma")).unwrap();

        assert_eq!(placed.id, OrderId::new(1));
        assert_eq!(shop.get_product("APL-IPH15-256-BLK").unwrap().stock, 4);
        assert_eq!(shop.get_order(OrderId::new(1)).unwrap(), placed);
        assert_eq!(shop.list_orders(), vec![placed]);
    }

    #[test]
    fn review_on_out_of_stock_product_keeps_stock_at_zero() {
        let shop = service();
        let err = AddReview::parse("APL-MBP-14-1TB-SLV", Some(6), None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        shop.add_review(AddReview::parse("APL-MBP-14-1TB-SLV", Some(4), None, Utc::now()).unwrap())
            .unwrap();
        assert_eq!(shop.get_product("APL-MBP-14-1TB-SLV").unwrap().stock, 0);
        assert_eq!(shop.get_reviews("APL-MBP-14-1TB-SLV").unwrap().count, 1);
    }

    #[test]
    fn surprise_orders_on_empty_stock_never_append() {
        let shop = ShopService::new(Catalog::empty());
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..5 {
            assert_eq!(
                shop.surprise_order_with(Some("Kim"), Utc::now(), &mut rng).unwrap_err(),
                DomainError::NoStock
            );
        }
        assert!(shop.list_orders().is_empty());
    }

    #[test]
    fn restock_makes_product_orderable() {
        let shop = service();
        assert!(matches!(
            shop.create_order(order("APL-MBP-14-1TB-SLV", "Alma")),
            Err(DomainError::OutOfStock(_))
        ));
        shop.restock("APL-MBP-14-1TB-SLV", 1).unwrap();
        assert!(shop.create_order(order("APL-MBP-14-1TB-SLV", "Alma")).is_ok());
        assert_eq!(shop.get_product("APL-MBP-14-1TB-SLV").unwrap().stock, 0);
    }

    #[test]
    fn concurrent_orders_never_oversell() {
        let shop = Arc::new(service());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let shop = Arc::clone(&shop);
                std::thread::spawn(move || {
                    shop.create_order(order("APL-IPH15-256-BLK", &format!("buyer-{i}")))
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 5);
        assert_eq!(shop.get_product("APL-IPH15-256-BLK").unwrap().stock, 0);

        let mut ids: Vec<u64> = shop.list_orders().iter().map(|o| o.id.value()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn stats_reflect_state() {
        let shop = service();
        shop.create_order(order("APL-IPAD-AIR-128-BLU", "Alma")).unwrap();
        let stats = shop.stats();
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.availability_ratio, 0.67);
    }
}
