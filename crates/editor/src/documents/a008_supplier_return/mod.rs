pub mod form;

pub use form::{SupplierReturnForm, SupplierReturnRow};
