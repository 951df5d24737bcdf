//! Read-only views computed over the shop state.

pub mod stats;
