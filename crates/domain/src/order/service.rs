//! Order service orchestrating validation, storage and publishing.

use common::{Order, OrderId};
use publisher::OrderPublisher;
use store::OrderStore;
use tokio::sync::Mutex;

use super::{OrderInput, validate};
use crate::error::OrderError;

/// Service for managing orders.
///
/// Per ID an order moves `absent -> live` on create, stays live across
/// updates, and returns to absent on delete. Every check-then-write sequence
/// runs under a single write lock so that two concurrent creates of the same
/// ID cannot both succeed. Reads only touch the store. Publishing happens
/// after the write lock is released and never affects the caller's result.
pub struct OrderService<S: OrderStore, P: OrderPublisher> {
    store: S,
    publisher: P,
    write_lock: Mutex<()>,
}

impl<S: OrderStore, P: OrderPublisher> OrderService<S, P> {
    /// Creates a new order service over the given store and publisher.
    pub fn new(store: S, publisher: P) -> Self {
        Self {
            store,
            publisher,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the underlying publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Creates a new order and publishes it.
    ///
    /// Fails with `Validation` for a malformed payload and `Conflict` if the
    /// ID is already live.
    #[tracing::instrument(skip(self, input))]
    pub async fn create(&self, input: impl Into<Option<OrderInput>>) -> Result<Order, OrderError> {
        let input = input.into();
        let order = validate(input.as_ref())?;

        {
            let _guard = self.write_lock.lock().await;

            if self.store.exists(&order.id).await? {
                tracing::debug!(order_id = %order.id, "rejecting duplicate order");
                return Err(OrderError::Conflict { id: order.id });
            }

            self.store.put(order.clone()).await?;
        }

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, "order created");

        self.publish(&order).await;

        Ok(order)
    }

    /// Loads a live order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound { id: id.clone() })
    }

    /// Replaces a live order.
    ///
    /// The ID in the path wins over any ID carried in the payload, so the
    /// stored record always keeps `id`. Updates are not published.
    #[tracing::instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: &OrderId,
        input: impl Into<Option<OrderInput>>,
    ) -> Result<Order, OrderError> {
        let input = input.into();
        let mut order = validate(input.as_ref())?;

        {
            let _guard = self.write_lock.lock().await;

            if !self.store.exists(id).await? {
                return Err(OrderError::NotFound { id: id.clone() });
            }

            order.id = id.clone();
            self.store.put(order.clone()).await?;
        }

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(order_id = %order.id, "order updated");

        Ok(order)
    }

    /// Removes a live order.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        {
            let _guard = self.write_lock.lock().await;

            if !self.store.exists(id).await? {
                return Err(OrderError::NotFound { id: id.clone() });
            }

            self.store.delete(id).await?;
        }

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(order_id = %id, "order deleted");

        Ok(())
    }

    /// Hands the order to the publisher. Failures are logged and counted only.
    async fn publish(&self, order: &Order) {
        match self.publisher.publish(order).await {
            Ok(receipt) => {
                metrics::counter!("orders_published_total").increment(1);
                tracing::debug!(
                    order_id = %order.id,
                    message_id = %receipt.message_id,
                    "order handed to publisher"
                );
            }
            Err(e) => {
                metrics::counter!("order_publish_failures_total").increment(1);
                tracing::warn!(order_id = %order.id, error = %e, "failed to publish order");
            }
        }
    }
}
