use crate::domain::a001_partner::PartnerId;
use crate::domain::a002_product::ProductId;
use crate::domain::a004_sales_invoice::InvoiceStatus;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для документа Приходная накладная поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseInvoiceId(pub Uuid);

impl PurchaseInvoiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PurchaseInvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseInvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Строка накладной поставщика (снимок для возврата поставщику)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseInvoiceLine {
    pub product_id: ProductId,

    /// Наименование на момент закупки
    pub product_name: String,

    pub unit: String,

    /// Закупленное количество — потолок для возврата
    pub quantity: f64,

    /// Закупочная цена
    pub price: f64,
}

/// Накладная поставщика (агрегат a005) — основание возврата поставщику.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInvoice {
    pub id: PurchaseInvoiceId,

    /// Номер документа (напр. "ПН-000088")
    pub number: String,

    /// Дата документа (YYYY-MM-DD)
    pub date: String,

    pub supplier_id: PartnerId,

    /// Наименование поставщика на момент оформления
    pub supplier_name: String,

    pub status: InvoiceStatus,

    pub lines: Vec<PurchaseInvoiceLine>,

    /// Итог накладной
    pub total: f64,
}
