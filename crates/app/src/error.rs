//! Application error types.

use catalog::ItemKind;
use common::OrderId;
use domain::{DomainError, RecommendationError};
use order_store::StorageError;
use thiserror::Error;

/// Errors surfaced to the front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// No catalog item of this kind has the identifier.
    #[error("{kind} not found: {id}")]
    ItemNotFound { kind: ItemKind, id: String },

    /// No order has the identifier.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Domain logic rejected the request.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The data directory could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Output could not be written or encoded.
    #[error("Output error: {0}")]
    Output(String),
}

impl AppError {
    /// Returns true for not-found errors, which the front end shows as an
    /// empty state rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ItemNotFound { .. } | AppError::OrderNotFound(_)
        )
    }
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        AppError::Domain(err.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(err.to_string())
    }
}
