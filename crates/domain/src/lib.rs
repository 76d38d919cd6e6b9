//! Domain layer for the order service.
//!
//! This crate provides the order lifecycle:
//! - [`validate`] checks an incoming payload and produces an [`Order`]
//! - [`OrderService`] enforces uniqueness and drives create/read/update/delete
//! - [`OrderError`] and [`ErrorKind`] form the error taxonomy seen by callers

pub mod error;
pub mod order;

pub use common::{Order, OrderId};
pub use error::{ErrorKind, OrderError};
pub use order::{Field, OrderInput, OrderService, ValidationError, validate};
