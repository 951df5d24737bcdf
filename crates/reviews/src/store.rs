use std::collections::BTreeMap;

use serde::Serialize;

use storefront_catalog::Catalog;
use storefront_core::{DomainError, DomainResult, Sku};

use crate::review::{AddReview, Review};

/// Aggregate view of a product's reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub sku: Sku,
    /// Arithmetic mean of all ratings; `None` while there are no reviews.
    pub avg_rating: Option<f64>,
    pub count: usize,
}

/// Summary plus the individual reviews, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductReviews {
    pub sku: Sku,
    pub avg_rating: Option<f64>,
    pub count: usize,
    pub reviews: Vec<Review>,
}

/// Reviews keyed by SKU.
///
/// Keys iterate in ascending SKU order. The store never touches catalog
/// stock; it only asks the catalog whether a SKU exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStore {
    by_sku: BTreeMap<Sku, Vec<Review>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_review(&mut self, catalog: &Catalog, cmd: AddReview) -> DomainResult<ReviewSummary> {
        ensure_known(catalog, &cmd.sku)?;

        let entries = self.by_sku.entry(cmd.sku.clone()).or_default();
        entries.push(Review {
            rating: cmd.rating,
            comment: cmd.comment,
            created_at: cmd.created_at,
        });
        tracing::info!(sku = %cmd.sku, rating = cmd.rating.value(), count = entries.len(), "review added");

        Ok(ReviewSummary {
            avg_rating: average(entries),
            count: entries.len(),
            sku: cmd.sku,
        })
    }

    pub fn get_reviews(&self, catalog: &Catalog, sku: &str) -> DomainResult<ProductReviews> {
        let sku = Sku::parse(sku).map_err(|_| DomainError::not_found(format!("product {sku}")))?;
        ensure_known(catalog, &sku)?;

        let reviews = self.by_sku.get(&sku).cloned().unwrap_or_default();
        Ok(ProductReviews {
            avg_rating: average(&reviews),
            count: reviews.len(),
            reviews,
            sku,
        })
    }

    /// Per-SKU summaries for every SKU with at least one review, in ascending
    /// SKU order.
    pub fn summaries(&self) -> impl Iterator<Item = ReviewSummary> + '_ {
        self.by_sku
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(sku, entries)| ReviewSummary {
                sku: sku.clone(),
                avg_rating: average(entries),
                count: entries.len(),
            })
    }

    pub fn total_reviews(&self) -> usize {
        self.by_sku.values().map(Vec::len).sum()
    }
}

fn ensure_known(catalog: &Catalog, sku: &Sku) -> DomainResult<()> {
    if catalog.contains(sku.as_str()) {
        Ok(())
    } else {
        Err(DomainError::not_found(format!("product {sku}")))
    }
}

fn average(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating.value())).sum();
    Some(f64::from(total) / reviews.len() as f64)
}
