//! Unvalidated order payload.

use common::Order;
use serde::Deserialize;

/// An order as received from a caller, before validation.
///
/// Every field is optional so that missing or `null` values reach the
/// validator instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderInput {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub total: Option<f64>,
}

impl OrderInput {
    /// Creates a payload with every field present.
    pub fn new(id: impl Into<String>, customer: impl Into<String>, total: f64) -> Self {
        Self {
            id: Some(id.into()),
            customer: Some(customer.into()),
            total: Some(total),
        }
    }
}

impl From<Order> for OrderInput {
    fn from(order: Order) -> Self {
        Self {
            id: Some(order.id.to_string()),
            customer: Some(order.customer),
            total: Some(order.total),
        }
    }
}
