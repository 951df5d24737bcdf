use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, OrderId, Sku};

/// How an order entered the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderVia {
    Standard,
    Surprise,
}

/// Non-blank, trimmed customer name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    pub const GUEST: &'static str = "Guest";

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("customer_name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Falls back to `"Guest"` when the name is missing or blank.
    pub fn or_guest(raw: Option<&str>) -> Self {
        raw.and_then(|r| Self::parse(r).ok())
            .unwrap_or_else(|| Self(Self::GUEST.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed order. Immutable once appended to the ledger.
///
/// `product_name` is a snapshot taken at placement time, not a live reference
/// into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub sku: Sku,
    pub customer_name: CustomerName,
    pub product_name: String,
    pub via: OrderVia,
    pub placed_at: DateTime<Utc>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: place an order for one unit of `sku`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    pub sku: Sku,
    pub customer_name: CustomerName,
    pub via: OrderVia,
    pub placed_at: DateTime<Utc>,
}

impl PlaceOrder {
    /// Build a standard order command from optional request fields.
    ///
    /// Both fields are required and must be non-blank.
    pub fn parse(
        sku: Option<&str>,
        customer_name: Option<&str>,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let (Some(sku), Some(customer_name)) = (sku, customer_name) else {
            return Err(DomainError::validation("sku and customer_name are required"));
        };
        Ok(Self {
            sku: Sku::parse(sku)?,
            customer_name: CustomerName::parse(customer_name)?,
            via: OrderVia::Standard,
            placed_at,
        })
    }
}
