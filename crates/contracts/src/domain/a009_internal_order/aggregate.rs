use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Строка внутреннего заказа: что и в каком количестве перебросить
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InternalOrderLine {
    pub product_id: ProductId,

    /// Наименование на момент выбора
    pub product_name: String,

    pub unit: String,

    pub quantity: f64,

    /// Себестоимость за единицу (оценка перемещаемого)
    pub cost_price: f64,

    /// Сумма строки = quantity * cost_price, округлённая до копеек
    pub total: f64,
}

/// Документ «Внутренний заказ» (a009) — заявка на перемещение между складами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalOrderPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    /// Склад-отправитель
    pub source_warehouse_id: WarehouseId,

    /// Склад-получатель; обязан отличаться от отправителя
    pub dest_warehouse_id: WarehouseId,

    /// Назначение заказа (обязательное)
    pub purpose: String,

    pub note: String,

    pub items: Vec<InternalOrderLine>,

    pub total_amount: f64,

    pub status: DocumentStatus,
}
