//! Order record and related types.

mod aggregate;
mod commands;
mod confirmation;
mod state;

pub use aggregate::Order;
pub use commands::NewOrder;
pub use confirmation::ConfirmationCode;
pub use state::OrderStatus;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Order is not in a status that allows the requested transition.
    #[error("Invalid status transition: cannot move from {current} to {target}")]
    InvalidStatusTransition {
        current: OrderStatus,
        target: OrderStatus,
    },
}
