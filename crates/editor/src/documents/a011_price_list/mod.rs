pub mod form;

pub use form::{PriceListForm, PriceListRow};
