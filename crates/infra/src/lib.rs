//! Infrastructure layer: shared in-memory state and read-only projections.

pub mod projections;
pub mod shop;

pub use projections::stats::{ShopStats, TopRated};
pub use shop::{ShopService, ShopState};
