pub mod aggregate;

pub use aggregate::{WriteoffLine, WriteoffPayload, WriteoffReason};
