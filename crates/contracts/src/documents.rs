//! Объединяющий тип документа для передачи между редактором и сервером.
//!
//! Сервер различает семейства по полю `document_type`; внутри каждого
//! варианта лежит типизированное тело соответствующего документа.

use crate::domain::a006_goods_receipt::GoodsReceiptPayload;
use crate::domain::a007_customer_return::CustomerReturnPayload;
use crate::domain::a008_supplier_return::SupplierReturnPayload;
use crate::domain::a009_internal_order::InternalOrderPayload;
use crate::domain::a010_inventory_count::InventoryCountPayload;
use crate::domain::a011_price_list::PriceListPayload;
use crate::domain::a012_writeoff::WriteoffPayload;
use crate::domain::a013_warehouse_transfer::WarehouseTransferPayload;
use serde::{Deserialize, Serialize};

/// Документ любого из восьми семейств с дискриминатором `document_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "document_type", rename_all = "snake_case")]
pub enum DocumentPayload {
    GoodsReceipt(GoodsReceiptPayload),
    CustomerReturn(CustomerReturnPayload),
    SupplierReturn(SupplierReturnPayload),
    InternalOrder(InternalOrderPayload),
    InventoryCount(InventoryCountPayload),
    PriceList(PriceListPayload),
    Writeoff(WriteoffPayload),
    WarehouseTransfer(WarehouseTransferPayload),
}

/// Сохранённый документ журнала: тело плюс ключ, назначенный сервером
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    #[serde(flatten)]
    pub payload: DocumentPayload,
}

impl DocumentPayload {
    /// Значение дискриминатора, как оно уходит в JSON
    pub fn document_type(&self) -> &'static str {
        match self {
            DocumentPayload::GoodsReceipt(_) => "goods_receipt",
            DocumentPayload::CustomerReturn(_) => "customer_return",
            DocumentPayload::SupplierReturn(_) => "supplier_return",
            DocumentPayload::InternalOrder(_) => "internal_order",
            DocumentPayload::InventoryCount(_) => "inventory_count",
            DocumentPayload::PriceList(_) => "price_list",
            DocumentPayload::Writeoff(_) => "writeoff",
            DocumentPayload::WarehouseTransfer(_) => "warehouse_transfer",
        }
    }

    /// Название семейства для журнала и уведомлений
    pub fn type_label(&self) -> &'static str {
        match self {
            DocumentPayload::GoodsReceipt(_) => "Оприходование товара",
            DocumentPayload::CustomerReturn(_) => "Возврат от покупателя",
            DocumentPayload::SupplierReturn(_) => "Возврат поставщику",
            DocumentPayload::InternalOrder(_) => "Внутренний заказ",
            DocumentPayload::InventoryCount(_) => "Инвентаризация",
            DocumentPayload::PriceList(_) => "Прайс-лист",
            DocumentPayload::Writeoff(_) => "Списание товара",
            DocumentPayload::WarehouseTransfer(_) => "Перемещение между складами",
        }
    }

    /// Дата документа; у прайс-листа это дата начала действия
    pub fn document_date(&self) -> &str {
        match self {
            DocumentPayload::GoodsReceipt(p) => &p.document_date,
            DocumentPayload::CustomerReturn(p) => &p.document_date,
            DocumentPayload::SupplierReturn(p) => &p.document_date,
            DocumentPayload::InternalOrder(p) => &p.document_date,
            DocumentPayload::InventoryCount(p) => &p.document_date,
            DocumentPayload::PriceList(p) => &p.effective_date,
            DocumentPayload::Writeoff(p) => &p.document_date,
            DocumentPayload::WarehouseTransfer(p) => &p.document_date,
        }
    }

    /// Итоговая сумма для колонки журнала. У инвентаризации это
    /// суммарное расхождение, у прайс-листа суммы нет.
    pub fn total(&self) -> f64 {
        match self {
            DocumentPayload::GoodsReceipt(p) => p.total_amount,
            DocumentPayload::CustomerReturn(p) => p.total_amount,
            DocumentPayload::SupplierReturn(p) => p.total_amount,
            DocumentPayload::InternalOrder(p) => p.total_amount,
            DocumentPayload::InventoryCount(p) => p.shortage_amount + p.surplus_amount,
            DocumentPayload::PriceList(_) => 0.0,
            DocumentPayload::Writeoff(p) => p.total_amount,
            DocumentPayload::WarehouseTransfer(p) => p.total_value,
        }
    }

    /// Человекочитаемое состояние документа
    pub fn status_label(&self) -> &'static str {
        match self {
            DocumentPayload::GoodsReceipt(p) => p.status.label(),
            DocumentPayload::CustomerReturn(p) => p.status.label(),
            DocumentPayload::SupplierReturn(p) => p.status.label(),
            DocumentPayload::InternalOrder(p) => p.status.label(),
            DocumentPayload::InventoryCount(p) => p.status.label(),
            DocumentPayload::PriceList(p) => p.status.label(),
            DocumentPayload::Writeoff(p) => p.status.label(),
            DocumentPayload::WarehouseTransfer(p) => p.status.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_partner::PartnerId;
    use crate::domain::a002_product::ProductId;
    use crate::domain::a003_warehouse::WarehouseId;
    use crate::domain::a006_goods_receipt::{GoodsReceiptLine, ReceiptReason};
    use crate::domain::common::DocumentStatus;
    use uuid::Uuid;

    fn receipt() -> DocumentPayload {
        DocumentPayload::GoodsReceipt(GoodsReceiptPayload {
            document_date: "2025-03-14".to_string(),
            supplier_id: PartnerId::new(Uuid::new_v4()),
            warehouse_id: WarehouseId::new(Uuid::new_v4()),
            reason: ReceiptReason::Purchase,
            note: String::new(),
            items: vec![GoodsReceiptLine {
                product_id: ProductId::new(Uuid::new_v4()),
                product_name: "Саморез 3.5x35".to_string(),
                unit: "упак".to_string(),
                quantity: 10.0,
                cost_price: 1500.0,
                total: 15000.0,
            }],
            total_amount: 15000.0,
            status: DocumentStatus::Draft,
        })
    }

    #[test]
    fn union_carries_snake_case_tag() {
        let json = serde_json::to_string(&receipt()).unwrap();
        assert!(json.contains("\"document_type\":\"goods_receipt\""));
        assert!(json.contains("\"reason\":\"purchase\""));
    }

    #[test]
    fn union_round_trips_through_json() {
        let payload = receipt();
        let json = serde_json::to_string(&payload).unwrap();
        let back: DocumentPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
        assert_eq!(back.document_type(), "goods_receipt");
        assert_eq!(back.total(), 15000.0);
    }

    #[test]
    fn record_flattens_id_next_to_tag() {
        let record = DocumentRecord {
            id: "doc-17".to_string(),
            payload: receipt(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":\"doc-17\""));
        assert!(json.contains("\"document_type\":\"goods_receipt\""));

        let back: DocumentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
