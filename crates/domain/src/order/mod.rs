//! Order payloads, validation and the order service.

mod input;
mod service;
mod validator;

pub use input::OrderInput;
pub use service::OrderService;
pub use validator::{Field, ValidationError, validate};
