//! Publisher error types.

use common::OrderId;
use thiserror::Error;

/// Errors that can occur while handing an order to the downstream system.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The order cannot be published as-is.
    #[error("Order {id} cannot be published: {reason}")]
    InvalidOrder { id: OrderId, reason: String },

    /// The downstream system rejected or did not accept the message.
    #[error("Downstream unavailable: {0}")]
    Unavailable(String),
}

/// Result type for publish operations.
pub type Result<T> = std::result::Result<T, PublishError>;
