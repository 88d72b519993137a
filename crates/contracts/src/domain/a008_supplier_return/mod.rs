pub mod aggregate;

pub use aggregate::{SupplierReturnLine, SupplierReturnPayload};
