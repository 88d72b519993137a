pub mod aggregate;

pub use aggregate::{InternalOrderLine, InternalOrderPayload};
