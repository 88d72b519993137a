pub mod aggregate;

pub use aggregate::{PriceListLine, PriceListPayload, PriceListStatus};
