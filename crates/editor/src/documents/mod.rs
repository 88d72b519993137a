//! Модели форм восьми семейств складских документов.
//!
//! Нумерация модулей совпадает с нумерацией агрегатов в `contracts`.

pub mod a006_goods_receipt;
pub mod a007_customer_return;
pub mod a008_supplier_return;
pub mod a009_internal_order;
pub mod a010_inventory_count;
pub mod a011_price_list;
pub mod a012_writeoff;
pub mod a013_warehouse_transfer;
