use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Sku};

/// Star rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::validation("rating must be an integer between 1 and 5"))
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// One review entry. Never edited after it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Command: add a review to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReview {
    pub sku: Sku,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl AddReview {
    /// Build the command from optional request fields.
    ///
    /// `rating` is required; `comment` is trimmed and defaults to empty.
    pub fn parse(
        sku: &str,
        rating: Option<i64>,
        comment: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let rating = rating
            .ok_or_else(|| DomainError::validation("rating must be an integer between 1 and 5"))?;
        Ok(Self {
            sku: Sku::parse(sku)?,
            rating: Rating::try_from(rating)?,
            comment: comment.map(str::trim).unwrap_or_default().to_string(),
            created_at,
        })
    }
}
