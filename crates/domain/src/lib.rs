//! Domain layer for the storefront.
//!
//! This crate provides:
//! - the `Order` record with its pickup status state machine
//! - confirmation code generation
//! - the recommendation selector behind the "AI picks" screen

pub mod error;
pub mod order;
pub mod recommend;

pub use error::DomainError;
pub use order::{ConfirmationCode, NewOrder, Order, OrderError, OrderStatus};
pub use recommend::{DEFAULT_RECOMMENDATION_COUNT, RecommendationError, Recommender};
