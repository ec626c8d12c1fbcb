//! Small helpers shared across the crate: hex formatting and poll budgets.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
