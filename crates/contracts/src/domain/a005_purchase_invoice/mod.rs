pub mod aggregate;

pub use aggregate::{PurchaseInvoice, PurchaseInvoiceId, PurchaseInvoiceLine};
