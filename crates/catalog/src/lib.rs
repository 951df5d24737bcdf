//! Catalog domain module.
//!
//! Product records and their stock levels, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use product::Product;
pub use seed::demo_products;
