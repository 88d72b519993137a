pub mod aggregate;

pub use aggregate::{CustomerReturnLine, CustomerReturnPayload, ReturnReason};
