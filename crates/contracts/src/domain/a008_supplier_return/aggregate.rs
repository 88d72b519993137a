use crate::domain::a001_partner::PartnerId;
use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use crate::domain::a005_purchase_invoice::PurchaseInvoiceId;
use crate::domain::a007_customer_return::ReturnReason;
use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Строка возврата поставщику. Количество ограничено закупленным
/// по накладной-основанию.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierReturnLine {
    pub product_id: ProductId,

    /// Наименование из строки накладной-основания
    pub product_name: String,

    pub unit: String,

    /// Возвращаемое количество
    pub quantity: f64,

    /// Потолок возврата (закуплено по основанию)
    pub max_quantity: f64,

    /// Закупочная цена из основания
    pub price: f64,

    /// Сумма строки = quantity * price, округлённая до копеек
    pub total: f64,

    pub reason: Option<ReturnReason>,
}

/// Документ «Возврат поставщику» (a008) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierReturnPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    /// Накладная-основание
    pub invoice_id: PurchaseInvoiceId,

    pub supplier_id: PartnerId,

    /// Склад, с которого уходит возврат
    pub warehouse_id: WarehouseId,

    pub note: String,

    /// Только позиции с ненулевым количеством
    pub items: Vec<SupplierReturnLine>,

    pub total_amount: f64,

    pub status: DocumentStatus,
}
