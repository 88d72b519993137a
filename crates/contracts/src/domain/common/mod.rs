//! Общие типы и трейты для всех агрегатов

pub mod aggregate_id;
pub mod document_status;

pub use aggregate_id::AggregateId;
pub use document_status::DocumentStatus;
