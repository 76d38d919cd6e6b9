//! Domain constraints on order payloads.

use common::Order;
use thiserror::Error;

use super::OrderInput;

/// The part of a payload a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Order,
    Id,
    Customer,
    Total,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Order => "order",
            Field::Id => "id",
            Field::Customer => "customer",
            Field::Total => "total",
        };
        write!(f, "{name}")
    }
}

/// A payload violated a domain constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Checks a payload and returns the validated order.
///
/// Rules are checked in order and the first violation is reported:
/// 1. the payload must be present
/// 2. `id` must not be missing, empty or whitespace-only
/// 3. `customer` must not be missing, empty or whitespace-only
/// 4. `total` must be present, greater than zero and not NaN
///
/// Field values are kept as given; nothing is trimmed.
pub fn validate(input: Option<&OrderInput>) -> Result<Order, ValidationError> {
    let input =
        input.ok_or_else(|| ValidationError::new(Field::Order, "order must not be null"))?;

    let id = non_blank(input.id.as_deref())
        .ok_or_else(|| ValidationError::new(Field::Id, "id must not be blank"))?;

    let customer = non_blank(input.customer.as_deref())
        .ok_or_else(|| ValidationError::new(Field::Customer, "customer must not be blank"))?;

    // NaN fails the comparison as well.
    let total = input
        .total
        .filter(|total| *total > 0.0)
        .ok_or_else(|| ValidationError::new(Field::Total, "total must be greater than zero"))?;

    Ok(Order::new(id, customer, total))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
