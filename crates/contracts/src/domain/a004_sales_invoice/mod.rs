pub mod aggregate;

pub use aggregate::{InvoiceStatus, SalesInvoice, SalesInvoiceId, SalesInvoiceLine};
