use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Order, OrderId, Result, store::OrderStore};

/// In-memory order store.
///
/// Cloning produces another handle to the same map. Reads share the lock,
/// writes take it exclusively.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live orders.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Returns true if no orders are stored.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn exists(&self, id: &OrderId) -> Result<bool> {
        Ok(self.orders.read().await.contains_key(id))
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn put(&self, order: Order) -> Result<()> {
        tracing::trace!(order_id = %order.id, "storing order");
        self.orders.write().await.insert(order.id.clone(), order);
        Ok(())
    }

    async fn delete(&self, id: &OrderId) -> Result<()> {
        tracing::trace!(order_id = %id, "removing order");
        self.orders.write().await.remove(id);
        Ok(())
    }
}
