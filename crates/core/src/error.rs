//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, JSON envelopes) belong to the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (missing or malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced SKU or order does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The requested product has no units left.
    #[error("{0} is out of stock")]
    OutOfStock(String),

    /// No product in the catalog has any units left.
    #[error("no products in stock")]
    NoStock,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn out_of_stock(product_name: impl Into<String>) -> Self {
        Self::OutOfStock(product_name.into())
    }
}
