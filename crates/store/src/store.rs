use async_trait::async_trait;

use crate::{Order, OrderId, Result};

/// Key/value holder of order records keyed by ID.
///
/// The store performs no validation; callers are responsible for handing it
/// well-formed orders. Writes to the same key are last-write-wins.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns true if a live record with this ID is present.
    async fn exists(&self, id: &OrderId) -> Result<bool>;

    /// Returns the current record for this ID, or None if absent.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>>;

    /// Inserts the order at `order.id`, replacing any existing record.
    async fn put(&self, order: Order) -> Result<()>;

    /// Removes the record for this ID if present.
    async fn delete(&self, id: &OrderId) -> Result<()>;
}
