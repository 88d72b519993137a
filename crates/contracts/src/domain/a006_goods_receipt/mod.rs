pub mod aggregate;

pub use aggregate::{GoodsReceiptLine, GoodsReceiptPayload, ReceiptReason};
