pub mod form;

pub use form::{CustomerReturnForm, CustomerReturnRow};
