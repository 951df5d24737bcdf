use axum::{
    routing::{get, post},
    Router,
};

pub mod orders;
pub mod products;
pub mod reviews;
pub mod stats;
pub mod system;

/// Router for the shop endpoints (everything except `/` and `/health`).
pub fn router() -> Router {
    Router::new()
        .route("/order", post(orders::create_order))
        .route("/orders", post(orders::create_order).get(orders::list_orders))
        .route("/orders/:id", get(orders::get_order))
        .route("/surprise-order", post(orders::surprise_order))
        .route("/stats", get(stats::get_stats))
        .nest("/products", products::router())
}
