use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Причина списания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteoffReason {
    Damaged,
    Expired,
    Lost,
    Other,
}

impl WriteoffReason {
    pub const ALL: [WriteoffReason; 4] = [
        WriteoffReason::Damaged,
        WriteoffReason::Expired,
        WriteoffReason::Lost,
        WriteoffReason::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WriteoffReason::Damaged => "Порча",
            WriteoffReason::Expired => "Истёк срок годности",
            WriteoffReason::Lost => "Утрата",
            WriteoffReason::Other => "Прочее",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WriteoffReason::Damaged => "damaged",
            WriteoffReason::Expired => "expired",
            WriteoffReason::Lost => "lost",
            WriteoffReason::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }
}

/// Строка акта списания
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriteoffLine {
    pub product_id: ProductId,

    /// Наименование на момент выбора
    pub product_name: String,

    pub unit: String,

    pub quantity: f64,

    pub cost_price: f64,

    /// Сумма строки = quantity * cost_price, округлённая до копеек
    pub total: f64,
}

/// Документ «Списание товара» (a012) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteoffPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    pub warehouse_id: WarehouseId,

    pub reason: WriteoffReason,

    /// Обоснование списания (обязательное)
    pub purpose: String,

    pub items: Vec<WriteoffLine>,

    pub total_amount: f64,

    pub status: DocumentStatus,
}
