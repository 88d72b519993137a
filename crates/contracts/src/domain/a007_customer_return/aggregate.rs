use crate::domain::a001_partner::PartnerId;
use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use crate::domain::a004_sales_invoice::SalesInvoiceId;
use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Причина возврата позиции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnReason {
    Defective,
    WrongItem,
    CustomerRefused,
    Other,
}

impl ReturnReason {
    pub const ALL: [ReturnReason; 4] = [
        ReturnReason::Defective,
        ReturnReason::WrongItem,
        ReturnReason::CustomerRefused,
        ReturnReason::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReturnReason::Defective => "Брак",
            ReturnReason::WrongItem => "Пересорт",
            ReturnReason::CustomerRefused => "Отказ покупателя",
            ReturnReason::Other => "Прочее",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReturnReason::Defective => "defective",
            ReturnReason::WrongItem => "wrong_item",
            ReturnReason::CustomerRefused => "customer_refused",
            ReturnReason::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }
}

/// Строка возврата от покупателя. Количество не может превысить
/// `max_quantity` — отгруженное по накладной-основанию.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerReturnLine {
    pub product_id: ProductId,

    /// Наименование из строки накладной-основания
    pub product_name: String,

    pub unit: String,

    /// Возвращаемое количество
    pub quantity: f64,

    /// Потолок возврата (отгружено по основанию)
    pub max_quantity: f64,

    /// Цена из накладной-основания
    pub price: f64,

    /// Сумма строки = quantity * price, округлённая до копеек
    pub total: f64,

    pub reason: Option<ReturnReason>,
}

/// Документ «Возврат от покупателя» (a007) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerReturnPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    /// Накладная-основание
    pub invoice_id: SalesInvoiceId,

    pub customer_id: PartnerId,

    /// Склад, принимающий возврат
    pub warehouse_id: WarehouseId,

    pub note: String,

    /// Только позиции с ненулевым количеством
    pub items: Vec<CustomerReturnLine>,

    pub total_amount: f64,

    pub status: DocumentStatus,
}
