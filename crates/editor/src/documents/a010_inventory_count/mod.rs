pub mod form;

pub use form::{InventoryCountForm, InventoryCountRow};
