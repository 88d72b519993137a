pub mod form;

pub use form::{InternalOrderForm, InternalOrderRow};
