use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use serde::{Deserialize, Serialize};

/// Жизненный цикл перемещения между складами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    InTransit,
    Completed,
    Cancelled,
}

impl TransferStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Ожидает отгрузки",
            TransferStatus::InTransit => "В пути",
            TransferStatus::Completed => "Завершено",
            TransferStatus::Cancelled => "Отменено",
        }
    }

    /// Допустимые переходы. Завершённое и отменённое перемещения финальны;
    /// отменить можно до прибытия на склад-получатель.
    pub fn can_transition(&self, to: TransferStatus) -> bool {
        use TransferStatus::*;
        matches!(
            (self, to),
            (Pending, InTransit) | (Pending, Cancelled) | (InTransit, Completed) | (InTransit, Cancelled)
        )
    }
}

/// Строка перемещения
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarehouseTransferLine {
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

/// Документ «Перемещение между складами» (a013) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseTransferPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    /// Склад-отправитель
    pub source_warehouse_id: WarehouseId,

    /// Склад-получатель; обязан отличаться от отправителя
    pub dest_warehouse_id: WarehouseId,

    /// Комментарий к перемещению (единственное необязательное назначение)
    pub note: String,

    pub items: Vec<WarehouseTransferLine>,

    /// Оценочная стоимость перемещаемого
    pub total_value: f64,

    pub status: TransferStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_lifecycle_table() {
        use TransferStatus::*;
        assert!(Pending.can_transition(InTransit));
        assert!(Pending.can_transition(Cancelled));
        assert!(InTransit.can_transition(Completed));
        assert!(InTransit.can_transition(Cancelled));

        assert!(!Pending.can_transition(Completed));
        assert!(!InTransit.can_transition(Pending));
        for to in [Pending, InTransit, Completed, Cancelled] {
            assert!(!Completed.can_transition(to));
            assert!(!Cancelled.can_transition(to));
        }
    }
}
