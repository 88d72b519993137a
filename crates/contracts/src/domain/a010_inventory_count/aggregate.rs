use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Строка инвентаризационной ведомости.
/// `difference` и `difference_amount` — знаковые: недостача отрицательна.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryCountLine {
    pub product_id: ProductId,

    /// Наименование на момент выбора
    pub product_name: String,

    pub unit: String,

    /// Учётное количество (по данным системы)
    pub system_quantity: f64,

    /// Фактическое количество (по пересчёту)
    pub actual_quantity: f64,

    /// actual_quantity - system_quantity
    pub difference: f64,

    pub cost_price: f64,

    /// difference * cost_price, округлённое до копеек
    pub difference_amount: f64,
}

/// Документ «Инвентаризация» (a010) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCountPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    pub warehouse_id: WarehouseId,

    pub note: String,

    pub items: Vec<InventoryCountLine>,

    /// Сумма недостач (положительное число)
    pub shortage_amount: f64,

    /// Сумма излишков (положительное число)
    pub surplus_amount: f64,

    pub status: DocumentStatus,
}
