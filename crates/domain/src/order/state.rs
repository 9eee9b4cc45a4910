//! Order status state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// PickupPending ──► Completed
/// ```
///
/// Every order starts as `PickupPending`. Nothing in the storefront moves an
/// order to `Completed`; that is left to pickup confirmation by store staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, waiting for the customer at the store.
    #[default]
    #[serde(rename = "Pickup Pending", alias = "PickupPending")]
    PickupPending,

    /// Item picked up or service delivered (terminal state).
    Completed,
}

impl OrderStatus {
    /// Returns true if the order can be completed in this state.
    pub fn can_complete(&self) -> bool {
        matches!(self, OrderStatus::PickupPending)
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Returns the status label as shown to customers.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PickupPending => "Pickup Pending",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
