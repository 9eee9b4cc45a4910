//! Shared value types used across the storefront crates.

mod price;
mod types;

pub use price::Price;
pub use types::{ItemId, ItemType, OrderId};
