use crate::catalog::Catalog;
use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a009_internal_order::{InternalOrderLine, InternalOrderPayload};
use contracts::domain::common::DocumentStatus;

/// Строка внутреннего заказа
#[derive(Debug, Clone, PartialEq)]
pub struct InternalOrderRow {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub unit: String,
    pub quantity: f64,
    /// Себестоимость из снимка справочника
    pub cost_price: f64,
    /// Всегда равна round2(quantity * cost_price)
    pub total: f64,
}

impl InternalOrderRow {
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

/// Форма документа «Внутренний заказ» — заявка на переброску товара
/// со склада на склад.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalOrderForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub source_warehouse_id: Option<WarehouseId>,
    pub dest_warehouse_id: Option<WarehouseId>,
    /// Назначение заказа, обязательное
    pub purpose: String,
    pub note: String,
    pub rows: Vec<InternalOrderRow>,
}

impl InternalOrderForm {
    /// Пустая форма с одной незаполненной строкой
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            source_warehouse_id: None,
            dest_warehouse_id: None,
            purpose: String::new(),
            note: String::new(),
            rows: vec![InternalOrderRow::empty()],
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &InternalOrderPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| InternalOrderRow {
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
            source_warehouse_id: Some(payload.source_warehouse_id),
            dest_warehouse_id: Some(payload.dest_warehouse_id),
            purpose: payload.purpose.clone(),
            note: payload.note.clone(),
            rows: if rows.is_empty() {
                vec![InternalOrderRow::empty()]
            } else {
                rows
            },
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(InternalOrderRow::empty());
    }

    /// Последняя строка не удаляется
    pub fn remove_row(&mut self, index: usize) {
        if self.rows.len() > 1 && index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Подбор товара; себестоимость копируется из снимка в момент выбора
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

    /// Оценочная стоимость заказа
    pub fn total_amount(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.total).sum())
    }
}

impl DocumentForm for InternalOrderForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.document_date.trim().is_empty() {
            errors.push("Укажите дату документа".to_string());
        }
        if self.source_warehouse_id.is_none() {
            errors.push("Выберите склад-отправитель".to_string());
        }
        if self.dest_warehouse_id.is_none() {
            errors.push("Выберите склад-получатель".to_string());
        }
        if let (Some(source), Some(dest)) = (self.source_warehouse_id, self.dest_warehouse_id) {
            if source == dest {
                errors.push("Склад-отправитель и склад-получатель должны различаться".to_string());
            }
        }
        if self.purpose.trim().is_empty() {
            errors.push("Укажите назначение заказа".to_string());
        }
        if !self.rows.iter().any(|r| r.is_resolved() && r.quantity > 0.0) {
            errors.push("Добавьте хотя бы одну позицию с количеством".to_string());
        }
        errors
    }

    fn payload(&self) -> Option<DocumentPayload> {
        let source_warehouse_id = self.source_warehouse_id?;
        let dest_warehouse_id = self.dest_warehouse_id?;
        let items = self
            .rows
            .iter()
            .filter_map(|row| {
                let product_id = row.product_id?;
                Some(InternalOrderLine {
                    product_id,
                    product_name: row.product_name.clone(),
                    unit: row.unit.clone(),
                    quantity: row.quantity,
                    cost_price: row.cost_price,
                    total: row.total,
                })
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::InternalOrder(InternalOrderPayload {
            document_date: self.document_date.clone(),
            source_warehouse_id,
            dest_warehouse_id,
            purpose: self.purpose.clone(),
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

    fn filled(catalog: &Catalog) -> InternalOrderForm {
        let mut form = InternalOrderForm::new("2025-03-14");
        form.source_warehouse_id = Some(catalog.warehouses()[0].id);
        form.dest_warehouse_id = Some(catalog.warehouses()[1].id);
        form.purpose = "Пополнение розницы".to_string();
        form.select_product(0, catalog.products()[1].id, catalog);
        form.set_quantity(0, 20.0);
        form
    }

    #[test]
    fn matching_warehouses_are_rejected() {
        let catalog = fixtures::catalog();
        let mut form = filled(&catalog);
        form.dest_warehouse_id = form.source_warehouse_id;

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("различаться")));
    }

    #[test]
    fn distinct_warehouses_pass() {
        let catalog = fixtures::catalog();
        let form = filled(&catalog);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn purpose_is_mandatory() {
        let catalog = fixtures::catalog();
        let mut form = filled(&catalog);
        form.purpose = "   ".to_string();

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("назначение")));
    }

    #[test]
    fn rows_priced_by_catalog_cost() {
        let catalog = fixtures::catalog();
        let form = filled(&catalog);
        assert_eq!(form.rows[0].cost_price, 90.0);
        assert_eq!(form.rows[0].total, 1800.0);
        assert_eq!(form.total_amount(), 1800.0);
    }
}
