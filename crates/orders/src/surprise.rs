//! Surprise orders: one unit of a random in-stock product.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use storefront_catalog::Catalog;
use storefront_core::{DomainError, DomainResult, Sku};

use crate::ledger::OrderLedger;
use crate::order::{CustomerName, Order, OrderVia, PlaceOrder};

/// Pick an in-stock product uniformly at random and order it.
///
/// Fails with [`DomainError::NoStock`] when nothing is in stock, in which case
/// neither the catalog nor the ledger is touched. A blank or missing customer
/// name becomes `"Guest"`.
pub fn pick_surprise<'a, R>(
    catalog: &mut Catalog,
    ledger: &'a mut OrderLedger,
    customer_name: Option<&str>,
    placed_at: DateTime<Utc>,
    rng: &mut R,
) -> DomainResult<&'a Order>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<&Sku> = catalog.in_stock().map(|p| &p.sku).collect();
    let sku = candidates.choose(rng).map(|s| (*s).clone()).ok_or(DomainError::NoStock)?;

    let cmd = PlaceOrder {
        sku,
        customer_name: CustomerName::or_guest(customer_name),
        via: OrderVia::Surprise,
        placed_at,
    };
    ledger.create_order(catalog, cmd)
}
