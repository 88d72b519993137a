pub mod form;

pub use form::{GoodsReceiptForm, GoodsReceiptRow};
