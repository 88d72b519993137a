use crate::catalog::Catalog;
use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a012_writeoff::{WriteoffLine, WriteoffPayload, WriteoffReason};
use contracts::domain::common::DocumentStatus;

/// Строка акта списания
#[derive(Debug, Clone, PartialEq)]
pub struct WriteoffRow {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub unit: String,
    pub quantity: f64,
    /// Себестоимость из снимка справочника
    pub cost_price: f64,
    /// Всегда равна round2(quantity * cost_price)
    pub total: f64,
}

impl WriteoffRow {
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

/// Форма документа «Списание товара»
#[derive(Debug, Clone, PartialEq)]
pub struct WriteoffForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub warehouse_id: Option<WarehouseId>,
    pub reason: WriteoffReason,
    /// Обоснование списания, обязательное
    pub purpose: String,
    pub rows: Vec<WriteoffRow>,
}

impl WriteoffForm {
    /// Пустая форма с одной незаполненной строкой
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            warehouse_id: None,
            reason: WriteoffReason::Damaged,
            purpose: String::new(),
            rows: vec![WriteoffRow::empty()],
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &WriteoffPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| WriteoffRow {
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
            warehouse_id: Some(payload.warehouse_id),
            reason: payload.reason,
            purpose: payload.purpose.clone(),
            rows: if rows.is_empty() {
                vec![WriteoffRow::empty()]
            } else {
                rows
            },
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(WriteoffRow::empty());
    }

    /// Последняя строка не удаляется
    pub fn remove_row(&mut self, index: usize) {
        if self.rows.len() > 1 && index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Подбор товара; списание оценивается по себестоимости из снимка
    pub fn select_product(&mut self, index: usize, id: ProductId, catalog: &Catalog) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let Some(product) = catalog.product(&id) else {
            return;
        };
        row.product_id = Some(id);
        row.product_name = product.name.clone();
        row.unit = product.unit.clone();
        row.cost_price = product.cost_price;
        row.recalc();
    }

    pub fn set_quantity(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.quantity = zero_floor(value);
            row.recalc();
        }
    }

    pub fn set_reason(&mut self, reason: WriteoffReason) {
        self.reason = reason;
    }

    /// Итог акта; каждый раз выводится из строк заново
    pub fn total_amount(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.total).sum())
    }
}

impl DocumentForm for WriteoffForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.document_date.trim().is_empty() {
            errors.push("Укажите дату документа".to_string());
        }
        if self.warehouse_id.is_none() {
            errors.push("Выберите склад".to_string());
        }
        if self.purpose.trim().is_empty() {
            errors.push("Укажите обоснование списания".to_string());
        }
        if !self.rows.iter().any(|r| r.is_resolved() && r.quantity > 0.0) {
            errors.push("Добавьте хотя бы одну позицию с количеством".to_string());
        }
        errors
    }

    fn payload(&self) -> Option<DocumentPayload> {
        let warehouse_id = self.warehouse_id?;
        let items = self
            .rows
            .iter()
            .filter_map(|row| {
                let product_id = row.product_id?;
                Some(WriteoffLine {
                    product_id,
                    product_name: row.product_name.clone(),
                    unit: row.unit.clone(),
                    quantity: row.quantity,
                    cost_price: row.cost_price,
                    total: row.total,
                })
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::Writeoff(WriteoffPayload {
            document_date: self.document_date.clone(),
            warehouse_id,
            reason: self.reason,
            purpose: self.purpose.clone(),
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

    #[test]
    fn writeoff_is_valued_at_cost() {
        let catalog = fixtures::catalog();
        let mut form = WriteoffForm::new("2025-03-14");
        form.warehouse_id = Some(catalog.warehouses()[0].id);
        form.purpose = "Бой при разгрузке".to_string();
        form.select_product(0, catalog.products()[2].id, &catalog);
        form.set_quantity(0, 3.0);

        assert_eq!(form.rows[0].cost_price, 3600.0);
        assert_eq!(form.total_amount(), 10800.0);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn missing_purpose_blocks_the_act() {
        let catalog = fixtures::catalog();
        let mut form = WriteoffForm::new("2025-03-14");
        form.warehouse_id = Some(catalog.warehouses()[0].id);
        form.select_product(0, catalog.products()[0].id, &catalog);
        form.set_quantity(0, 1.0);

        let errors = form.validate();
        assert_eq!(errors, vec!["Укажите обоснование списания".to_string()]);
    }

    #[test]
    fn payload_keeps_reason_and_purpose() {
        let catalog = fixtures::catalog();
        let mut form = WriteoffForm::new("2025-03-14");
        form.warehouse_id = Some(catalog.warehouses()[0].id);
        form.set_reason(WriteoffReason::Expired);
        form.purpose = "Срок годности истёк 01.03".to_string();
        form.select_product(0, catalog.products()[1].id, &catalog);
        form.set_quantity(0, 10.0);

        match form.payload() {
            Some(DocumentPayload::Writeoff(p)) => {
                assert_eq!(p.reason, WriteoffReason::Expired);
                assert_eq!(p.purpose, "Срок годности истёк 01.03");
                assert_eq!(p.total_amount, 900.0);
            }
            other => panic!("неожиданное тело документа: {:?}", other),
        }
    }
}
