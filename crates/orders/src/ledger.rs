use storefront_catalog::Catalog;
use storefront_core::{DomainError, DomainResult, OrderId, find_by_id};

use crate::order::{Order, PlaceOrder};

/// Append-only sequence of orders.
///
/// Ids start at 1 and are only allocated once the stock decrement has
/// succeeded, so failed attempts never consume an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_id: OrderId,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: OrderId::FIRST,
        }
    }

    /// Take one unit of stock and record the order.
    ///
    /// The decrement and the append happen together or not at all: if the
    /// catalog rejects the decrement, the ledger is left untouched.
    pub fn create_order(&mut self, catalog: &mut Catalog, cmd: PlaceOrder) -> DomainResult<&Order> {
        let product = catalog.decrement_stock(cmd.sku.as_str())?;

        let order = Order {
            id: self.next_id,
            sku: cmd.sku,
            customer_name: cmd.customer_name,
            product_name: product.name.clone(),
            via: cmd.via,
            placed_at: cmd.placed_at,
        };
        tracing::info!(
            order_id = %order.id,
            sku = %order.sku,
            via = ?order.via,
            remaining_stock = product.stock,
            "order placed"
        );

        self.next_id = self.next_id.next();
        let index = self.orders.len();
        self.orders.push(order);
        Ok(&self.orders[index])
    }

    /// All orders in creation order.
    pub fn list_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get_order(&self, id: OrderId) -> DomainResult<&Order> {
        find_by_id(&self.orders, &id)
            .ok_or_else(|| DomainError::not_found(format!("order {id}")))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
