use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a001_partner::PartnerId;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a004_sales_invoice::{SalesInvoice, SalesInvoiceId};
use contracts::domain::a007_customer_return::{
    CustomerReturnLine, CustomerReturnPayload, ReturnReason,
};
use contracts::domain::common::DocumentStatus;

/// Строка возврата от покупателя. Создаётся только из строки
/// накладной-основания, поэтому ссылка на товар всегда разрешена.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerReturnRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit: String,
    /// Возвращаемое количество, всегда в пределах [0, max_quantity]
    pub quantity: f64,
    /// Отгружено по основанию — потолок возврата
    pub max_quantity: f64,
    /// Цена из накладной-основания
    pub price: f64,
    /// Всегда равна round2(quantity * price)
    pub total: f64,
    pub reason: Option<ReturnReason>,
}

impl CustomerReturnRow {
    fn recalc(&mut self) {
        self.total = round2(self.quantity * self.price);
    }
}

/// Форма документа «Возврат от покупателя».
///
/// Строки добавлять нельзя: вернуть можно только позиции основания.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerReturnForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub invoice_id: Option<SalesInvoiceId>,
    pub customer_id: Option<PartnerId>,
    /// Склад, принимающий возврат
    pub warehouse_id: Option<WarehouseId>,
    pub note: String,
    pub rows: Vec<CustomerReturnRow>,
}

impl CustomerReturnForm {
    /// Форма без основания: строки появятся после выбора накладной
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            invoice_id: None,
            customer_id: None,
            warehouse_id: None,
            note: String::new(),
            rows: Vec::new(),
        }
    }

    /// Построить форму по накладной-основанию: по строке на каждую позицию,
    /// количество сброшено в ноль, потолок — отгруженное количество.
    pub fn from_invoice(invoice: &SalesInvoice, document_date: impl Into<String>) -> Self {
        let rows = invoice
            .lines
            .iter()
            .map(|line| CustomerReturnRow {
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
            customer_id: Some(invoice.customer_id),
            warehouse_id: None,
            note: String::new(),
            rows,
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &CustomerReturnPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| CustomerReturnRow {
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
            customer_id: Some(payload.customer_id),
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

impl DocumentForm for CustomerReturnForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.document_date.trim().is_empty() {
            errors.push("Укажите дату документа".to_string());
        }
        if self.invoice_id.is_none() {
            errors.push("Выберите накладную-основание".to_string());
        }
        if self.warehouse_id.is_none() {
            errors.push("Выберите склад приёмки".to_string());
        }
        if !self.rows.iter().any(|r| r.quantity > 0.0) {
            errors.push("Укажите количество хотя бы по одной позиции".to_string());
        }
        errors
    }

    fn payload(&self) -> Option<DocumentPayload> {
        let invoice_id = self.invoice_id?;
        let customer_id = self.customer_id?;
        let warehouse_id = self.warehouse_id?;
        // Нулевые количества — невозвращаемые позиции, в документ не входят
        let items = self
            .rows
            .iter()
            .filter(|row| row.quantity > 0.0)
            .map(|row| CustomerReturnLine {
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
        Some(DocumentPayload::CustomerReturn(CustomerReturnPayload {
            document_date: self.document_date.clone(),
            invoice_id,
            customer_id,
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
    use contracts::domain::a004_sales_invoice::{InvoiceStatus, SalesInvoiceLine};
    use uuid::Uuid;

    /// Оплаченная накладная на две позиции: 5 дрелей и 3 пары перчаток
    fn paid_invoice() -> SalesInvoice {
        let catalog = fixtures::catalog();
        let drill = &catalog.products()[0];
        let gloves = &catalog.products()[1];
        let invoice = SalesInvoice {
            id: SalesInvoiceId::new(Uuid::new_v4()),
            number: "РН-000314".to_string(),
            date: "2025-02-28".to_string(),
            customer_id: catalog.customers().next().map(|p| p.id).unwrap(),
            customer_name: "ООО Ромашка".to_string(),
            status: InvoiceStatus::Paid,
            lines: vec![
                SalesInvoiceLine {
                    product_id: drill.id,
                    product_name: drill.name.clone(),
                    unit: drill.unit.clone(),
                    quantity: 5.0,
                    price: drill.selling_price,
                },
                SalesInvoiceLine {
                    product_id: gloves.id,
                    product_name: gloves.name.clone(),
                    unit: gloves.unit.clone(),
                    quantity: 3.0,
                    price: gloves.selling_price,
                },
            ],
            total: 5.0 * drill.selling_price + 3.0 * gloves.selling_price,
        };
        invoice
    }

    #[test]
    fn rows_start_zeroed_with_invoice_ceilings() {
        let invoice = paid_invoice();
        let form = CustomerReturnForm::from_invoice(&invoice, "2025-03-14");

        assert_eq!(form.rows.len(), 2);
        assert_eq!(form.customer_id, Some(invoice.customer_id));
        for (row, line) in form.rows.iter().zip(&invoice.lines) {
            assert_eq!(row.quantity, 0.0);
            assert_eq!(row.max_quantity, line.quantity);
            assert_eq!(row.price, line.price);
            assert_eq!(row.total, 0.0);
        }
    }

    #[test]
    fn quantity_overshoot_clamps_to_ceiling() {
        let invoice = paid_invoice();
        let mut form = CustomerReturnForm::from_invoice(&invoice, "2025-03-14");

        form.set_quantity(0, 7.0);
        assert_eq!(form.rows[0].quantity, 5.0);
        assert_eq!(form.rows[0].total, round2(5.0 * form.rows[0].price));

        form.set_quantity(0, -2.0);
        assert_eq!(form.rows[0].quantity, 0.0);

        form.set_quantity(0, 2.5);
        assert_eq!(form.rows[0].quantity, 2.5);
    }

    #[test]
    fn zero_quantity_rows_stay_out_of_payload() {
        let invoice = paid_invoice();
        let mut form = CustomerReturnForm::from_invoice(&invoice, "2025-03-14");
        form.warehouse_id = Some(fixtures::catalog().warehouses()[0].id);
        form.set_quantity(0, 2.0);
        form.set_reason(0, Some(ReturnReason::Defective));

        assert!(form.validate().is_empty());
        match form.payload() {
            Some(DocumentPayload::CustomerReturn(p)) => {
                assert_eq!(p.items.len(), 1);
                assert_eq!(p.items[0].quantity, 2.0);
                assert_eq!(p.items[0].reason, Some(ReturnReason::Defective));
                assert_eq!(p.total_amount, form.total_amount());
            }
            other => panic!("неожиданное тело документа: {:?}", other),
        }
    }

    #[test]
    fn untouched_return_is_rejected() {
        let invoice = paid_invoice();
        let mut form = CustomerReturnForm::from_invoice(&invoice, "2025-03-14");
        form.warehouse_id = Some(fixtures::catalog().warehouses()[0].id);

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("количество")));
    }

    #[test]
    fn form_without_invoice_names_the_gap() {
        let form = CustomerReturnForm::new("2025-03-14");
        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("основание")));
        assert!(form.payload().is_none());
    }
}
