pub mod aggregate;

pub use aggregate::{TransferStatus, WarehouseTransferLine, WarehouseTransferPayload};
