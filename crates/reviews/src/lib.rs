//! Product reviews domain module.
//!
//! Ratings and comments keyed by SKU, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod review;
pub mod store;

pub use review::{AddReview, Rating, Review};
pub use store::{ProductReviews, ReviewStore, ReviewSummary};
