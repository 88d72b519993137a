use crate::catalog::Catalog;
use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a013_warehouse_transfer::{
    TransferStatus, WarehouseTransferLine, WarehouseTransferPayload,
};

/// Строка перемещения
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseTransferRow {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub unit: String,
    pub quantity: f64,
    /// Себестоимость из снимка справочника
    pub cost_price: f64,
    /// Всегда равна round2(quantity * cost_price)
    pub total: f64,
}

impl WarehouseTransferRow {
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

/// Форма документа «Перемещение между складами».
///
/// Требования к строкам строже, чем у остальных форм: перемещение
/// уходит в работу кладовщикам, поэтому незаполненных строк-заготовок
/// в документе быть не может.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseTransferForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub source_warehouse_id: Option<WarehouseId>,
    pub dest_warehouse_id: Option<WarehouseId>,
    /// Комментарий; единственное необязательное назначение
    pub note: String,
    pub rows: Vec<WarehouseTransferRow>,
}

impl WarehouseTransferForm {
    /// Пустая форма с одной незаполненной строкой
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            source_warehouse_id: None,
            dest_warehouse_id: None,
            note: String::new(),
            rows: vec![WarehouseTransferRow::empty()],
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &WarehouseTransferPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| WarehouseTransferRow {
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
            note: payload.note.clone(),
            rows: if rows.is_empty() {
                vec![WarehouseTransferRow::empty()]
            } else {
                rows
            },
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(WarehouseTransferRow::empty());
    }

    /// Последняя строка не удаляется
    pub fn remove_row(&mut self, index: usize) {
        if self.rows.len() > 1 && index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Подбор товара; перемещение оценивается по себестоимости из снимка
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

    /// Оценочная стоимость перемещаемого
    pub fn total_value(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.total).sum())
    }
}

impl DocumentForm for WarehouseTransferForm {
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
        if self.rows.is_empty() {
            errors.push("Добавьте хотя бы одну позицию".to_string());
        }
        // Каждая строка перемещения обязана быть заполненной
        for (i, row) in self.rows.iter().enumerate() {
            if !row.is_resolved() {
                errors.push(format!("Строка {}: не выбран товар", i + 1));
            } else if row.quantity <= 0.0 {
                errors.push(format!("Строка {}: количество должно быть больше нуля", i + 1));
            }
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
                Some(WarehouseTransferLine {
                    product_id,
                    product_name: row.product_name.clone(),
                    unit: row.unit.clone(),
                    quantity: row.quantity,
                    cost_price: row.cost_price,
                    total: row.total,
                })
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::WarehouseTransfer(WarehouseTransferPayload {
            document_date: self.document_date.clone(),
            source_warehouse_id,
            dest_warehouse_id,
            note: self.note.clone(),
            total_value: self.total_value(),
            items,
            status: TransferStatus::Pending,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn filled(catalog: &Catalog) -> WarehouseTransferForm {
        let mut form = WarehouseTransferForm::new("2025-03-14");
        form.source_warehouse_id = Some(catalog.warehouses()[0].id);
        form.dest_warehouse_id = Some(catalog.warehouses()[1].id);
        form.select_product(0, catalog.products()[0].id, catalog);
        form.set_quantity(0, 2.0);
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
    fn every_row_must_be_complete() {
        let catalog = fixtures::catalog();
        let mut form = filled(&catalog);
        form.add_row();

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("Строка 2")));

        form.remove_row(1);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn zero_quantity_rows_are_named() {
        let catalog = fixtures::catalog();
        let mut form = filled(&catalog);
        form.set_quantity(0, 0.0);

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("больше нуля")));
    }

    #[test]
    fn note_stays_optional() {
        let catalog = fixtures::catalog();
        let form = filled(&catalog);
        assert!(form.note.is_empty());
        assert!(form.validate().is_empty());
    }

    #[test]
    fn transfer_opens_pending() {
        let catalog = fixtures::catalog();
        let form = filled(&catalog);

        match form.payload() {
            Some(DocumentPayload::WarehouseTransfer(p)) => {
                assert_eq!(p.status, TransferStatus::Pending);
                assert_eq!(p.total_value, 20000.0);
            }
            other => panic!("неожиданное тело документа: {:?}", other),
        }
    }
}
