pub mod form;

pub use form::{WriteoffForm, WriteoffRow};
