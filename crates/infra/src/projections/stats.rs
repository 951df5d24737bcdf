use serde::Serialize;

use storefront_catalog::Catalog;
use storefront_core::Sku;
use storefront_orders::OrderLedger;
use storefront_reviews::ReviewStore;

/// Best-reviewed product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRated {
    pub sku: Sku,
    /// Rounded to two decimals.
    pub avg_rating: f64,
    pub count: usize,
}

/// Summary counters over catalog, ledger and reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    /// `in_stock / total_products` rounded to two decimals; 0 for an empty
    /// catalog.
    pub availability_ratio: f64,
    pub total_orders: usize,
    pub total_reviews: usize,
    pub top_rated: Option<TopRated>,
}

impl ShopStats {
    pub fn compute(catalog: &Catalog, ledger: &OrderLedger, reviews: &ReviewStore) -> Self {
        let total_products = catalog.len();
        let in_stock = catalog.in_stock().count();
        let availability_ratio = if total_products == 0 {
            0.0
        } else {
            round2(in_stock as f64 / total_products as f64)
        };

        Self {
            total_products,
            in_stock,
            out_of_stock: total_products - in_stock,
            availability_ratio,
            total_orders: ledger.len(),
            total_reviews: reviews.total_reviews(),
            top_rated: top_rated(reviews),
        }
    }
}

/// Highest average wins; on a tie the lowest SKU (first in iteration order)
/// is kept.
fn top_rated(reviews: &ReviewStore) -> Option<TopRated> {
    let mut best: Option<TopRated> = None;
    for summary in reviews.summaries() {
        let Some(avg) = summary.avg_rating else {
            continue;
        };
        if best.as_ref().is_none_or(|b| avg > b.avg_rating) {
            best = Some(TopRated {
                sku: summary.sku,
                avg_rating: avg,
                count: summary.count,
            });
        }
    }
    best.map(|b| TopRated {
        avg_rating: round2(b.avg_rating),
        ..b
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_catalog::Product;
    use storefront_orders::PlaceOrder;
    use storefront_reviews::AddReview;

    fn product(sku: &str, stock: u32) -> Product {
        Product {
            sku: Sku::parse(sku).unwrap(),
            name: sku.to_string(),
            storage: "256GB".to_string(),
            connectivity: "5G".to_string(),
            colour: "Blue".to_string(),
            stock,
        }
    }

    fn rate(store: &mut ReviewStore, catalog: &Catalog, sku: &str, rating: i64) {
        store
            .add_review(catalog, AddReview::parse(sku, Some(rating), None, Utc::now()).unwrap())
            .unwrap();
    }

    #[test]
    fn availability_ratio_for_one_of_three_out_of_stock() {
        let catalog = Catalog::demo().unwrap();
        let stats = ShopStats::compute(&catalog, &OrderLedger::new(), &ReviewStore::new());

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.availability_ratio, 0.67);
        assert_eq!(stats.top_rated, None);
    }

    #[test]
    fn empty_catalog_has_zero_ratio() {
        let stats = ShopStats::compute(&Catalog::empty(), &OrderLedger::new(), &ReviewStore::new());
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.availability_ratio, 0.0);
    }

    #[test]
    fn counts_orders_and_reviews() {
        let mut catalog = Catalog::demo().unwrap();
        let mut ledger = OrderLedger::new();
        let mut reviews = ReviewStore::new();
        ledger
            .create_order(
                &mut catalog,
                PlaceOrder::parse(Some("APL-IPAD-AIR-128-BLU"), Some("Alma"), Utc::now()).unwrap(),
            )
            .unwrap();
        rate(&mut reviews, &catalog, "APL-IPAD-AIR-128-BLU", 4);

        let stats = ShopStats::compute(&catalog, &ledger, &reviews);
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.total_reviews, 1);
    }

    #[test]
    fn top_rated_picks_highest_average_and_rounds() {
        let catalog = Catalog::new(vec![product("A", 1), product("B", 1), product("C", 1)]).unwrap();
        let mut reviews = ReviewStore::new();
        rate(&mut reviews, &catalog, "A", 3);
        for r in [5, 4, 4] {
            rate(&mut reviews, &catalog, "B", r);
        }

        let top = ShopStats::compute(&catalog, &OrderLedger::new(), &reviews)
            .top_rated
            .unwrap();
        assert_eq!(top.sku.as_str(), "B");
        assert_eq!(top.avg_rating, 4.33);
        assert_eq!(top.count, 3);
    }

    #[test]
    fn top_rated_tie_goes_to_lowest_sku() {
        let catalog = Catalog::new(vec![product("ZED", 1), product("ALPHA", 1)]).unwrap();
        let mut reviews = ReviewStore::new();
        rate(&mut reviews, &catalog, "ZED", 5);
        rate(&mut reviews, &catalog, "ALPHA", 5);

        let top = ShopStats::compute(&catalog, &OrderLedger::new(), &reviews)
            .top_rated
            .unwrap();
        assert_eq!(top.sku.as_str(), "ALPHA");
    }

    #[test]
    fn stats_serialize_null_top_rated() {
        let stats = ShopStats::compute(&Catalog::empty(), &OrderLedger::new(), &ReviewStore::new());
        let json = serde_json::to_value(stats).unwrap();
        assert!(json["top_rated"].is_null());
    }
}
