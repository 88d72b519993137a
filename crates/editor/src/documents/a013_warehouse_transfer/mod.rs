pub mod form;

pub use form::{WarehouseTransferForm, WarehouseTransferRow};
