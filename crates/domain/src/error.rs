//! Domain error types.

use common::OrderId;
use store::StoreError;
use thiserror::Error;

use crate::order::ValidationError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The payload violates a domain constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An order with this ID is already live.
    #[error("order already exists")]
    Conflict { id: OrderId },

    /// No live order has this ID.
    #[error("order not found")]
    NotFound { id: OrderId },

    /// The store failed to serve the request.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Coarse classification of an [`OrderError`], used by the boundary to pick
/// a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Unclassified,
}

impl OrderError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::Validation(_) => ErrorKind::Validation,
            OrderError::Conflict { .. } => ErrorKind::Conflict,
            OrderError::NotFound { .. } => ErrorKind::NotFound,
            OrderError::Store(_) => ErrorKind::Unclassified,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unclassified => "unclassified",
        };
        write!(f, "{name}")
    }
}
