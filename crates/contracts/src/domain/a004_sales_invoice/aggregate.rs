use crate::domain::a001_partner::PartnerId;
use crate::domain::a002_product::ProductId;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для документа Расходная накладная
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesInvoiceId(pub Uuid);

impl SalesInvoiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SalesInvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalesInvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Состояние накладной-основания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Posted,
    Paid,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Черновик",
            InvoiceStatus::Posted => "Проведена",
            InvoiceStatus::Paid => "Оплачена",
        }
    }
}

/// Строка расходной накладной (снимок для построения возврата)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesInvoiceLine {
    pub product_id: ProductId,

    /// Наименование на момент продажи
    pub product_name: String,

    pub unit: String,

    /// Отгруженное количество — потолок для возврата
    pub quantity: f64,

    /// Цена продажи
    pub price: f64,
}

/// Расходная накладная (агрегат a004). Возврат от покупателя строится
/// по её строкам и не может выйти за их количества.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoice {
    pub id: SalesInvoiceId,

    /// Номер документа (напр. "РН-000314")
    pub number: String,

    /// Дата документа (YYYY-MM-DD)
    pub date: String,

    pub customer_id: PartnerId,

    /// Наименование покупателя на момент выписки
    pub customer_name: String,

    pub status: InvoiceStatus,

    pub lines: Vec<SalesInvoiceLine>,

    /// Итог накладной
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_status_serializes_snake_case() {
        let s = serde_json::to_string(&InvoiceStatus::Paid).unwrap();
        assert_eq!(s, "\"paid\"");
    }
}
