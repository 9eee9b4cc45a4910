//! Domain error types.

use thiserror::Error;

use crate::order::OrderError;
use crate::recommend::RecommendationError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An order rejected the requested change.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The recommendation request was invalid.
    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),
}
