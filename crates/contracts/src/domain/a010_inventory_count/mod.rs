pub mod aggregate;

pub use aggregate::{InventoryCountLine, InventoryCountPayload};
