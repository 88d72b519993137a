use crate::domain::a001_partner::PartnerId;
use crate::domain::a002_product::ProductId;
use crate::domain::a003_warehouse::WarehouseId;
use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Причина оприходования товара на склад
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptReason {
    /// Закупка у поставщика
    Purchase,
    /// Корректировка остатков по результатам сверки
    InventoryAdjustment,
    /// Найденные при ревизии излишки
    FoundItems,
    /// Выпуск собственной продукции
    Production,
}

impl ReceiptReason {
    pub const ALL: [ReceiptReason; 4] = [
        ReceiptReason::Purchase,
        ReceiptReason::InventoryAdjustment,
        ReceiptReason::FoundItems,
        ReceiptReason::Production,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReceiptReason::Purchase => "Закупка",
            ReceiptReason::InventoryAdjustment => "Корректировка остатков",
            ReceiptReason::FoundItems => "Оприходование излишков",
            ReceiptReason::Production => "Выпуск продукции",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReceiptReason::Purchase => "purchase",
            ReceiptReason::InventoryAdjustment => "inventory_adjustment",
            ReceiptReason::FoundItems => "found_items",
            ReceiptReason::Production => "production",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Для всех причин кроме закупки себестоимость при подборе товара
    /// подставляется нулевой: закупочной цены у такого прихода нет.
    pub fn zero_cost(&self) -> bool {
        !matches!(self, ReceiptReason::Purchase)
    }
}

/// Строка табличной части «Товары» приходного ордера
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoodsReceiptLine {
    pub product_id: ProductId,

    /// Наименование на момент выбора (снимок, не живая ссылка)
    pub product_name: String,

    pub unit: String,

    pub quantity: f64,

    /// Себестоимость за единицу
    pub cost_price: f64,

    /// Сумма строки = quantity * cost_price, округлённая до копеек
    pub total: f64,
}

/// Документ «Оприходование товара» (a006) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsReceiptPayload {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,

    pub supplier_id: PartnerId,

    pub warehouse_id: WarehouseId,

    pub reason: ReceiptReason,

    pub note: String,

    pub items: Vec<GoodsReceiptLine>,

    /// Итог документа = сумма строк
    pub total_amount: f64,

    pub status: DocumentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_purchase_carries_cost() {
        assert!(!ReceiptReason::Purchase.zero_cost());
        assert!(ReceiptReason::InventoryAdjustment.zero_cost());
        assert!(ReceiptReason::FoundItems.zero_cost());
        assert!(ReceiptReason::Production.zero_cost());
    }

    #[test]
    fn reason_code_round_trip() {
        for reason in ReceiptReason::ALL {
            assert_eq!(ReceiptReason::from_code(reason.code()), Some(reason));
        }
        assert_eq!(ReceiptReason::from_code("unknown"), None);
    }
}
