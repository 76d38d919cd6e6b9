//! Publisher trait and the logging implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::Order;
use uuid::Uuid;

use crate::error::{PublishError, Result};

/// Acknowledgement of a published order.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReceipt {
    /// ID assigned to the outbound message.
    pub message_id: Uuid,

    /// When the message was handed off.
    pub published_at: DateTime<Utc>,
}

impl PublishReceipt {
    /// Creates a receipt for a message handed off now.
    pub fn now() -> Self {
        Self {
            message_id: Uuid::new_v4(),
            published_at: Utc::now(),
        }
    }
}

/// Handoff of persisted orders to an external messaging system.
///
/// A single synchronous call per order; delivery guarantees beyond that are
/// the downstream system's concern.
#[async_trait]
pub trait OrderPublisher: Send + Sync {
    /// Publishes an order that has just been persisted.
    async fn publish(&self, order: &Order) -> Result<PublishReceipt>;
}

/// Publisher that records the handoff as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderPublisher for LogPublisher {
    async fn publish(&self, order: &Order) -> Result<PublishReceipt> {
        if order.customer.trim().is_empty() {
            return Err(PublishError::InvalidOrder {
                id: order.id.clone(),
                reason: "customer is blank".to_string(),
            });
        }

        let receipt = PublishReceipt::now();
        tracing::info!(
            message_id = %receipt.message_id,
            order_id = %order.id,
            customer = %order.customer,
            total = order.total,
            "order published"
        );
        Ok(receipt)
    }
}
