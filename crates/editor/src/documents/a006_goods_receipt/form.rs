use crate::catalog::Catalog;
use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a001_partner::PartnerId;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a006_goods_receipt::{GoodsReceiptLine, GoodsReceiptPayload, ReceiptReason};
use contracts::domain::common::DocumentStatus;

/// Строка формы оприходования
#[derive(Debug, Clone, PartialEq)]
pub struct GoodsReceiptRow {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub unit: String,
    pub quantity: f64,
    pub cost_price: f64,
    /// Всегда равна round2(quantity * cost_price)
    pub total: f64,
}

impl GoodsReceiptRow {
    fn empty() -> Self {
        Self {
            product_id: None,
            product_name: String::new(),
            unit: String::new(),
            quantity: 0.0,
            cost_price: 0.0,
            total: 0.0,
        }
    }

    fn recalc(&mut self) {
        self.total = round2(self.quantity * self.cost_price);
    }

    fn is_resolved(&self) -> bool {
        self.product_id.is_some()
    }
}

/// Форма документа «Оприходование товара»
#[derive(Debug, Clone, PartialEq)]
pub struct GoodsReceiptForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub supplier_id: Option<PartnerId>,
    pub warehouse_id: Option<WarehouseId>,
    pub reason: ReceiptReason,
    pub note: String,
    pub rows: Vec<GoodsReceiptRow>,
}

impl GoodsReceiptForm {
    /// Пустая форма с одной незаполненной строкой
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            supplier_id: None,
            warehouse_id: None,
            reason: ReceiptReason::Purchase,
            note: String::new(),
            rows: vec![GoodsReceiptRow::empty()],
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &GoodsReceiptPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| GoodsReceiptRow {
                product_id: Some(line.product_id),
                product_name: line.product_name.clone(),
                unit: line.unit.clone(),
                quantity: line.quantity,
                cost_price: line.cost_price,
                total: line.total,
            })
            .collect::<Vec<_>>();
        Self {
            document_date: payload.document_date.clone(),
            supplier_id: Some(payload.supplier_id),
            warehouse_id: Some(payload.warehouse_id),
            reason: payload.reason,
            note: payload.note.clone(),
            rows: if rows.is_empty() {
                vec![GoodsReceiptRow::empty()]
            } else {
                rows
            },
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(GoodsReceiptRow::empty());
    }

    /// Последняя строка не удаляется: форма всегда держит хотя бы одну
    pub fn remove_row(&mut self, index: usize) {
        if self.rows.len() > 1 && index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Подбор товара: наименование, единица и себестоимость копируются из
    /// снимка справочника в момент выбора. Для причин без закупки
    /// себестоимость подставляется нулевой; смена причины на уже
    /// набранные строки не влияет.
    pub fn select_product(&mut self, index: usize, id: ProductId, catalog: &Catalog) {
        let zero_cost = self.reason.zero_cost();
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let Some(product) = catalog.product(&id) else {
            return;
        };
        row.product_id = Some(id);
        row.product_name = product.name.clone();
        row.unit = product.unit.clone();
        row.cost_price = if zero_cost { 0.0 } else { product.cost_price };
        row.recalc();
    }

    pub fn set_quantity(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.quantity = zero_floor(value);
            row.recalc();
        }
    }

    pub fn set_cost_price(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.cost_price = zero_floor(value);
            row.recalc();
        }
    }

    pub fn set_reason(&mut self, reason: ReceiptReason) {
        self.reason = reason;
    }

    /// Итог документа; каждый раз выводится из строк заново
    pub fn total_amount(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.total).sum())
    }
}

impl DocumentForm for GoodsReceiptForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.document_date.trim().is_empty() {
            errors.push("Укажите дату документа".to_string());
        }
        if self.supplier_id.is_none() {
            errors.push("Выберите поставщика".to_string());
        }
        if self.warehouse_id.is_none() {
            errors.push("Выберите склад".to_string());
        }
        if !self.rows.iter().any(|r| r.is_resolved() && r.quantity > 0.0) {
            errors.push("Добавьте хотя бы одну позицию с количеством".to_string());
        }
        errors
    }

    fn payload(&self) -> Option<DocumentPayload> {
        let supplier_id = self.supplier_id?;
        let warehouse_id = self.warehouse_id?;
        let items = self
            .rows
            .iter()
            .filter_map(|row| {
                let product_id = row.product_id?;
                Some(GoodsReceiptLine {
                    product_id,
                    product_name: row.product_name.clone(),
                    unit: row.unit.clone(),
                    quantity: row.quantity,
                    cost_price: row.cost_price,
                    total: row.total,
                })
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::GoodsReceipt(GoodsReceiptPayload {
            document_date: self.document_date.clone(),
            supplier_id,
            warehouse_id,
            reason: self.reason,
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

    fn filled_form(catalog: &Catalog) -> GoodsReceiptForm {
        let mut form = GoodsReceiptForm::new("2025-03-14");
        form.supplier_id = catalog.suppliers().next().map(|p| p.id);
        form.warehouse_id = Some(catalog.warehouses()[0].id);
        form
    }

    #[test]
    fn receipt_of_ten_at_1500_totals_15000() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.select_product(0, catalog.products()[1].id, &catalog);
        form.set_quantity(0, 10.0);
        form.set_cost_price(0, 1500.0);

        assert_eq!(form.rows[0].total, 15000.0);
        assert_eq!(form.total_amount(), 15000.0);
        assert!(form.validate().is_empty());

        match form.payload() {
            Some(DocumentPayload::GoodsReceipt(p)) => {
                assert_eq!(p.items.len(), 1);
                assert_eq!(p.total_amount, 15000.0);
                assert_eq!(p.status, DocumentStatus::Draft);
            }
            other => panic!("неожиданное тело документа: {:?}", other),
        }
    }

    #[test]
    fn row_total_follows_every_edit() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.select_product(0, catalog.products()[0].id, &catalog);

        form.set_quantity(0, 3.0);
        assert_eq!(form.rows[0].total, 30000.0);

        form.set_cost_price(0, 9990.5);
        assert_eq!(form.rows[0].total, round2(3.0 * 9990.5));

        form.set_quantity(0, 0.0);
        assert_eq!(form.rows[0].total, 0.0);
    }

    #[test]
    fn document_total_is_sum_of_rows() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.select_product(0, catalog.products()[0].id, &catalog);
        form.set_quantity(0, 2.0);
        form.add_row();
        form.select_product(1, catalog.products()[1].id, &catalog);
        form.set_quantity(1, 10.0);

        let by_hand: f64 = form.rows.iter().map(|r| r.total).sum();
        assert_eq!(form.total_amount(), round2(by_hand));

        let before = form.total_amount();
        form.add_row();
        form.remove_row(2);
        assert_eq!(form.total_amount(), before);
    }

    #[test]
    fn zero_cost_reasons_price_rows_at_zero() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.set_reason(ReceiptReason::InventoryAdjustment);
        form.select_product(0, catalog.products()[0].id, &catalog);
        form.set_quantity(0, 4.0);

        assert_eq!(form.rows[0].cost_price, 0.0);
        assert_eq!(form.rows[0].total, 0.0);
    }

    #[test]
    fn reason_change_keeps_existing_snapshots() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.select_product(0, catalog.products()[0].id, &catalog);
        assert_eq!(form.rows[0].cost_price, 10000.0);

        form.set_reason(ReceiptReason::FoundItems);
        assert_eq!(form.rows[0].cost_price, 10000.0);

        form.add_row();
        form.select_product(1, catalog.products()[1].id, &catalog);
        assert_eq!(form.rows[1].cost_price, 0.0);
    }

    #[test]
    fn negative_input_coerced_to_zero() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.select_product(0, catalog.products()[0].id, &catalog);
        form.set_quantity(0, -5.0);
        form.set_cost_price(0, -100.0);

        assert_eq!(form.rows[0].quantity, 0.0);
        assert_eq!(form.rows[0].cost_price, 0.0);
        assert_eq!(form.rows[0].total, 0.0);
    }

    #[test]
    fn last_row_survives_removal() {
        let mut form = GoodsReceiptForm::new("2025-03-14");
        form.remove_row(0);
        assert_eq!(form.rows.len(), 1);
    }

    #[test]
    fn empty_form_lists_every_missing_field() {
        let form = GoodsReceiptForm::new("2025-03-14");
        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("поставщика")));
        assert!(errors.iter().any(|e| e.contains("склад")));
        assert!(errors.iter().any(|e| e.contains("позицию")));
    }

    #[test]
    fn unknown_product_and_bad_index_are_ignored() {
        let catalog = fixtures::catalog();
        let other = fixtures::catalog();
        let mut form = filled_form(&catalog);

        // ID из чужого снимка в этом каталоге не находится
        form.select_product(0, other.products()[0].id, &catalog);
        assert!(form.rows[0].product_id.is_none());

        form.select_product(42, catalog.products()[0].id, &catalog);
        assert_eq!(form.rows.len(), 1);
    }

    #[test]
    fn saved_document_reopens_with_same_rows() {
        let catalog = fixtures::catalog();
        let mut form = filled_form(&catalog);
        form.select_product(0, catalog.products()[1].id, &catalog);
        form.set_quantity(0, 7.0);
        form.note = "Приёмка по накладной №88".to_string();

        let Some(DocumentPayload::GoodsReceipt(payload)) = form.payload() else {
            panic!("тело документа не собралось");
        };
        let reopened = GoodsReceiptForm::from_payload(&payload);

        assert_eq!(reopened.rows, form.rows);
        assert_eq!(reopened.note, form.note);
        assert_eq!(reopened.total_amount(), form.total_amount());
    }
}
