//! Outbound publishing of created orders.
//!
//! The [`OrderPublisher`] trait stands in for a downstream messaging system.
//! Two implementations are provided:
//! - [`LogPublisher`] emits the handoff as a structured tracing event
//! - [`InMemoryPublisher`] records published orders and can be told to fail

pub mod error;
pub mod memory;
pub mod publisher;

pub use error::{PublishError, Result};
pub use memory::InMemoryPublisher;
pub use publisher::{LogPublisher, OrderPublisher, PublishReceipt};
