use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a001_partner::PartnerId;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a005_purchase_invoice::{PurchaseInvoice, PurchaseInvoiceId};
use contracts::domain::a007_customer_return::ReturnReason;
use contracts::domain::a008_supplier_return::{SupplierReturnLine, SupplierReturnPayload};
use contracts::domain::common::DocumentStatus;

/// Строка возврата поставщику; создаётся только из строки основания
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierReturnRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit: String,
    /// Возвращаемое количество, всегда в пределах [0, max_quantity]
    pub quantity: f64,
    /// Закуплено по основанию — потолок возврата
    pub max_quantity: f64,
    /// Закупочная цена из основания
    pub price: f64,
    /// Всегда равна round2(quantity * price)
    pub total: f64,
    pub reason: Option<ReturnReason>,
}

impl SupplierReturnRow {
    fn recalc(&mut self) {
        self.total = round2(self.quantity * self.price);
    }
}

/// Форма документа «Возврат поставщику».
/// Зеркало возврата от покупателя: основание — накладная поставщика.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierReturnForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub invoice_id: Option<PurchaseInvoiceId>,
    pub supplier_id: Option<PartnerId>,
    /// Склад, с которого уходит возврат
    pub warehouse_id: Option<WarehouseId>,
    pub note: String,
    pub rows: Vec<SupplierReturnRow>,
}

impl SupplierReturnForm {
    /// Форма без основания: строки появятся после выбора накладной
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            invoice_id: None,
            supplier_id: None,
            warehouse_id: None,
            note: String::new(),
            rows: Vec::new(),
        }
    }

    /// Построить форму по накладной поставщика: количество сброшено
    /// в ноль, потолок — закупленное по основанию.
    pub fn from_invoice(invoice: &PurchaseInvoice, document_date: impl Into<String>) -> Self {
        let rows = invoice
            .lines
            .iter()
            .map(|line| SupplierReturnRow {
                product_id: line.product_id,
                product_name: line.product_name.clone(),
                unit: line.unit.clone(),
                quantity: 0.0,
                max_quantity: line.quantity,
                price: line.price,
                total: 0.0,
                reason: None,
            })
            .collect::<Vec<_>>();
        Self {
            document_date: document_date.into(),
            invoice_id: Some(invoice.id),
            supplier_id: Some(invoice.supplier_id),
            warehouse_id: None,
            note: String::new(),
            rows,
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &SupplierReturnPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| SupplierReturnRow {
                product_id: line.product_id,
                product_name: line.product_name.clone(),
                unit: line.unit.clone(),
                quantity: line.quantity,
                max_quantity: line.max_quantity,
                price: line.price,
                total: line.total,
                reason: line.reason,
            })
            .collect::<Vec<_>>();
        Self {
            document_date: payload.document_date.clone(),
            invoice_id: Some(payload.invoice_id),
            supplier_id: Some(payload.supplier_id),
            warehouse_id: Some(payload.warehouse_id),
            note: payload.note.clone(),
            rows,
        }
    }

    /// Количество молча зажимается в пределы [0, max_quantity]
    pub fn set_quantity(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.quantity = zero_floor(value).min(row.max_quantity);
            row.recalc();
        }
    }

    pub fn set_reason(&mut self, index: usize, reason: Option<ReturnReason>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.reason = reason;
        }
    }

    /// Итог по возвращаемым позициям
    pub fn total_amount(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.total).sum())
    }
}

impl DocumentForm for SupplierReturnForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.document_date.trim().is_empty() {
            errors.push("Укажите дату документа".to_string());
        }
        if self.invoice_id.is_none() {
            errors.push("Выберите накладную-основание".to_string());
        }
        if self.warehouse_id.is_none() {
            errors.push("Выберите склад отгрузки".to_string());
        }
        if !self.rows.iter().any(|r| r.quantity > 0.0) {
            errors.push("Укажите количество хотя бы по одной позиции".to_string());
        }
        errors
    }

    fn payload(&self) -> Option<DocumentPayload> {
        let invoice_id = self.invoice_id?;
        let supplier_id = self.supplier_id?;
        let warehouse_id = self.warehouse_id?;
        let items = self
            .rows
            .iter()
            .filter(|row| row.quantity > 0.0)
            .map(|row| SupplierReturnLine {
                product_id: row.product_id,
                product_name: row.product_name.clone(),
                unit: row.unit.clone(),
                quantity: row.quantity,
                max_quantity: row.max_quantity,
                price: row.price,
                total: row.total,
                reason: row.reason,
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::SupplierReturn(SupplierReturnPayload {
            document_date: self.document_date.clone(),
            invoice_id,
            supplier_id,
            warehouse_id,
            note: self.note.clone(),
            total_amount: self.total_amount(),
            items,
            status: DocumentStatus::Draft,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use contracts::domain::a004_sales_invoice::InvoiceStatus;
    use contracts::domain::a005_purchase_invoice::PurchaseInvoiceLine;
    use uuid::Uuid;

    fn purchase_invoice() -> PurchaseInvoice {
        let catalog = fixtures::catalog();
        let cable = &catalog.products()[2];
        let invoice = PurchaseInvoice {
            id: PurchaseInvoiceId::new(Uuid::new_v4()),
            number: "ПН-000088".to_string(),
            date: "2025-01-20".to_string(),
            supplier_id: catalog.suppliers().next().map(|p| p.id).unwrap(),
            supplier_name: "ИП Фёдоров".to_string(),
            status: InvoiceStatus::Posted,
            lines: vec![PurchaseInvoiceLine {
                product_id: cable.id,
                product_name: cable.name.clone(),
                unit: cable.unit.clone(),
                quantity: 40.0,
                price: 3500.0,
            }],
            total: 140000.0,
        };
        invoice
    }

    #[test]
    fn builds_from_purchase_invoice_with_ceilings() {
        let invoice = purchase_invoice();
        let form = SupplierReturnForm::from_invoice(&invoice, "2025-03-14");

        assert_eq!(form.supplier_id, Some(invoice.supplier_id));
        assert_eq!(form.rows.len(), 1);
        assert_eq!(form.rows[0].max_quantity, 40.0);
        assert_eq!(form.rows[0].price, 3500.0);
        assert_eq!(form.rows[0].quantity, 0.0);
    }

    #[test]
    fn clamp_applies_to_purchase_ceiling() {
        let invoice = purchase_invoice();
        let mut form = SupplierReturnForm::from_invoice(&invoice, "2025-03-14");

        form.set_quantity(0, 55.0);
        assert_eq!(form.rows[0].quantity, 40.0);
        assert_eq!(form.rows[0].total, 140000.0);
    }

    #[test]
    fn payload_carries_only_returned_positions() {
        let invoice = purchase_invoice();
        let mut form = SupplierReturnForm::from_invoice(&invoice, "2025-03-14");
        form.warehouse_id = Some(fixtures::catalog().warehouses()[1].id);
        form.set_quantity(0, 4.0);

        assert!(form.validate().is_empty());
        match form.payload() {
            Some(DocumentPayload::SupplierReturn(p)) => {
                assert_eq!(p.items.len(), 1);
                assert_eq!(p.total_amount, 14000.0);
            }
            other => panic!("неожиданное тело документа: {:?}", other),
        }
    }
}
