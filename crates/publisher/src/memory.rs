//! In-memory publisher for tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use common::{Order, OrderId};

use crate::error::{PublishError, Result};
use crate::publisher::{OrderPublisher, PublishReceipt};

#[derive(Debug, Default)]
struct InMemoryPublisherState {
    published: Vec<Order>,
    fail_on_publish: bool,
}

/// Publisher that keeps every published order in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisher {
    state: Arc<Mutex<InMemoryPublisherState>>,
}

impl InMemoryPublisher {
    /// Creates a new in-memory publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to fail every subsequent publish call.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.lock().fail_on_publish = fail;
    }

    /// Returns the number of successfully published orders.
    pub fn published_count(&self) -> usize {
        self.lock().published.len()
    }

    /// Returns a copy of every successfully published order, oldest first.
    pub fn published(&self) -> Vec<Order> {
        self.lock().published.clone()
    }

    /// Returns true if an order with this ID was published.
    pub fn has_published(&self, id: &OrderId) -> bool {
        self.lock().published.iter().any(|o| &o.id == id)
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryPublisherState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OrderPublisher for InMemoryPublisher {
    async fn publish(&self, order: &Order) -> Result<PublishReceipt> {
        let mut state = self.lock();

        if state.fail_on_publish {
            return Err(PublishError::Unavailable("broker rejected message".to_string()));
        }

        state.published.push(order.clone());
        Ok(PublishReceipt::now())
    }
}
