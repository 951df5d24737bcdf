use serde::Deserialize;
use serde_json::Value;

use storefront_core::DomainError;
use storefront_orders::Order;
use storefront_reviews::ReviewSummary;

// -------------------------
// Request DTOs
// -------------------------
//
// Every field is optional at the wire level; presence and type checks happen
// when the DTO is turned into a domain command.

#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub sku: Option<String>,
    pub customer_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SurpriseOrderRequest {
    pub customer_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddReviewRequest {
    /// Kept as raw JSON so `4.5` or `"5"` can be told apart from a missing
    /// rating and reported as invalid input.
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

impl AddReviewRequest {
    /// `Ok(None)` when absent or null; error for anything but a JSON integer.
    pub fn rating(&self) -> Result<Option<i64>, DomainError> {
        match &self.rating {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| DomainError::validation("rating must be an integer between 1 and 5")),
            Some(_) => Err(DomainError::validation("rating must be an integer between 1 and 5")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RestockRequest {
    pub quantity: Option<Value>,
}

impl RestockRequest {
    pub fn quantity(&self) -> Result<u32, DomainError> {
        self.quantity
            .as_ref()
            .and_then(Value::as_u64)
            .filter(|q| *q > 0)
            .and_then(|q| u32::try_from(q).ok())
            .ok_or_else(|| DomainError::validation("quantity must be a positive integer"))
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn order_placed_to_json(order: &Order) -> Value {
    serde_json::json!({
        "status": "success",
        "message": format!("Order received for {} by {}", order.product_name, order.customer_name),
        "order": order,
    })
}

pub fn review_added_to_json(summary: &ReviewSummary) -> Value {
    serde_json::json!({
        "status": "success",
        "sku": summary.sku,
        "avg_rating": summary.avg_rating,
        "count": summary.count,
    })
}
