use serde::{Deserialize, Serialize};

/// Identifier of an order.
///
/// Compared by exact string equality: no trimming and no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the ID is empty or contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated order record.
///
/// Instances are only built by the validator or by the store returning
/// something it was given, so a stored `Order` always has a non-blank id and
/// customer and a strictly positive total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub total: f64,
}

impl Order {
    /// Creates a new order record. Performs no validation.
    pub fn new(id: impl Into<OrderId>, customer: impl Into<String>, total: f64) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_uses_exact_equality() {
        assert_ne!(OrderId::new("1"), OrderId::new(" 1"));
        assert_ne!(OrderId::new("abc"), OrderId::new("ABC"));
        assert_eq!(OrderId::new("abc"), OrderId::from("abc"));
    }

    #[test]
    fn order_id_blank_detection() {
        assert!(OrderId::new("").is_blank());
        assert!(OrderId::new("  \t").is_blank());
        assert!(!OrderId::new(" 1 ").is_blank());
    }

    #[test]
    fn order_serializes_with_flat_id() {
        let order = Order::new("1", "Cliente", 100.0);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "customer": "Cliente", "total": 100.0 })
        );
    }
}
