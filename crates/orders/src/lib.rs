//! Orders domain module.
//!
//! The append-only order ledger and the surprise picker, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Randomness is
//! injected by the caller.

pub mod ledger;
pub mod order;
pub mod surprise;

pub use ledger::OrderLedger;
pub use order::{CustomerName, Order, OrderVia, PlaceOrder};
pub use surprise::pick_surprise;
