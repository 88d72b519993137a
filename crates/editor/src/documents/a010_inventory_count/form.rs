use crate::catalog::Catalog;
use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a010_inventory_count::{InventoryCountLine, InventoryCountPayload};
use contracts::domain::common::DocumentStatus;

/// Строка инвентаризационной ведомости.
/// Расхождение знаковое: недостача уходит в минус, излишек в плюс.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryCountRow {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub unit: String,
    /// Учётное количество из снимка справочника
    pub system_quantity: f64,
    /// Фактическое количество по пересчёту
    pub actual_quantity: f64,
    /// actual_quantity - system_quantity
    pub difference: f64,
    pub cost_price: f64,
    /// round2(difference * cost_price)
    pub difference_amount: f64,
}

impl InventoryCountRow {
    fn empty() -> Self {
        Self {
            product_id: None,
            product_name: String::new(),
            unit: String::new(),
            system_quantity: 0.0,
            actual_quantity: 0.0,
            difference: 0.0,
            cost_price: 0.0,
            difference_amount: 0.0,
        }
    }

    fn recalc(&mut self) {
        self.difference = self.actual_quantity - self.system_quantity;
        self.difference_amount = round2(self.difference * self.cost_price);
    }

    fn is_resolved(&self) -> bool {
        self.product_id.is_some()
    }
}

/// Форма документа «Инвентаризация».
///
/// Единственная форма, которая может остаться без строк: ведомость
/// набирается либо кнопкой «Заполнить по остаткам», либо вручную.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryCountForm {
    /// Дата документа (YYYY-MM-DD)
    pub document_date: String,
    pub warehouse_id: Option<WarehouseId>,
    pub note: String,
    pub rows: Vec<InventoryCountRow>,
}

impl InventoryCountForm {
    /// Пустая ведомость без строк
    pub fn new(document_date: impl Into<String>) -> Self {
        Self {
            document_date: document_date.into(),
            warehouse_id: None,
            note: String::new(),
            rows: Vec::new(),
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &InventoryCountPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| InventoryCountRow {
                product_id: Some(line.product_id),
                product_name: line.product_name.clone(),
                unit: line.unit.clone(),
                system_quantity: line.system_quantity,
                actual_quantity: line.actual_quantity,
                difference: line.difference,
                cost_price: line.cost_price,
                difference_amount: line.difference_amount,
            })
            .collect::<Vec<_>>();
        Self {
            document_date: payload.document_date.clone(),
            warehouse_id: Some(payload.warehouse_id),
            note: payload.note.clone(),
            rows,
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(InventoryCountRow::empty());
    }

    /// Ведомость может опустеть полностью
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// «Заполнить по остаткам»: ведомость целиком заменяется строками по
    /// каждому товару с ненулевым учётным остатком. Факт приравнивается
    /// к учёту, расхождения нулевые — дальше кладовщик правит факт.
    pub fn fill_by_stock(&mut self, catalog: &Catalog) {
        self.rows = catalog
            .products_with_stock()
            .map(|product| InventoryCountRow {
                product_id: Some(product.id),
                product_name: product.name.clone(),
                unit: product.unit.clone(),
                system_quantity: product.stock,
                actual_quantity: product.stock,
                difference: 0.0,
                cost_price: product.cost_price,
                difference_amount: 0.0,
            })
            .collect();
    }

    /// Ручной подбор товара. В отличие от заполнения по остаткам факт
    /// начинается с нуля: пока позицию не пересчитали, вся она числится
    /// недостачей.
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
        row.system_quantity = product.stock;
        row.actual_quantity = 0.0;
        row.cost_price = product.cost_price;
        row.recalc();
    }

    pub fn set_actual_quantity(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.actual_quantity = zero_floor(value);
            row.recalc();
        }
    }

    /// Сумма недостач, положительное число
    pub fn shortage_amount(&self) -> f64 {
        round2(
            self.rows
                .iter()
                .filter(|r| r.difference_amount < 0.0)
                .map(|r| -r.difference_amount)
                .sum(),
        )
    }

    /// Сумма излишков, положительное число
    pub fn surplus_amount(&self) -> f64 {
        round2(
            self.rows
                .iter()
                .filter(|r| r.difference_amount > 0.0)
                .map(|r| r.difference_amount)
                .sum(),
        )
    }
}

impl DocumentForm for InventoryCountForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.document_date.trim().is_empty() {
            errors.push("Укажите дату документа".to_string());
        }
        if self.warehouse_id.is_none() {
            errors.push("Выберите склад".to_string());
        }
        if !self.rows.iter().any(|r| r.is_resolved()) {
            errors.push("Заполните ведомость: подберите товары или заполните по остаткам".to_string());
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
                Some(InventoryCountLine {
                    product_id,
                    product_name: row.product_name.clone(),
                    unit: row.unit.clone(),
                    system_quantity: row.system_quantity,
                    actual_quantity: row.actual_quantity,
                    difference: row.difference,
                    cost_price: row.cost_price,
                    difference_amount: row.difference_amount,
                })
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::InventoryCount(InventoryCountPayload {
            document_date: self.document_date.clone(),
            warehouse_id,
            note: self.note.clone(),
            shortage_amount: self.shortage_amount(),
            surplus_amount: self.surplus_amount(),
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
    fn fill_by_stock_mirrors_system_quantities() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.warehouse_id = Some(catalog.warehouses()[0].id);
        form.fill_by_stock(&catalog);

        // В справочнике ровно два товара с ненулевым остатком
        assert_eq!(form.rows.len(), 2);
        for row in &form.rows {
            assert_eq!(row.actual_quantity, row.system_quantity);
            assert_eq!(row.difference, 0.0);
            assert_eq!(row.difference_amount, 0.0);
        }
        assert_eq!(form.shortage_amount(), 0.0);
        assert_eq!(form.surplus_amount(), 0.0);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn fill_by_stock_replaces_manual_rows() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.add_row();
        form.select_product(0, catalog.products()[3].id, &catalog);

        form.fill_by_stock(&catalog);
        assert_eq!(form.rows.len(), 2);
        assert!(form
            .rows
            .iter()
            .all(|r| r.product_id != Some(catalog.products()[3].id)));
    }

    #[test]
    fn manual_row_starts_as_full_shortage() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.add_row();
        // Дрель: остаток 5, себестоимость 10000
        form.select_product(0, catalog.products()[0].id, &catalog);

        let row = &form.rows[0];
        assert_eq!(row.system_quantity, 5.0);
        assert_eq!(row.actual_quantity, 0.0);
        assert_eq!(row.difference, -5.0);
        assert_eq!(row.difference_amount, -50000.0);
        assert_eq!(form.shortage_amount(), 50000.0);
        assert_eq!(form.surplus_amount(), 0.0);
    }

    #[test]
    fn recount_flips_shortage_into_surplus() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.add_row();
        form.select_product(0, catalog.products()[0].id, &catalog);

        form.set_actual_quantity(0, 7.0);
        let row = &form.rows[0];
        assert_eq!(row.difference, 2.0);
        assert_eq!(row.difference_amount, 20000.0);
        assert_eq!(form.shortage_amount(), 0.0);
        assert_eq!(form.surplus_amount(), 20000.0);
    }

    #[test]
    fn aggregates_split_by_sign() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.fill_by_stock(&catalog);

        // Дрель: недостача двух штук; перчатки: излишек десяти пар
        form.set_actual_quantity(0, 3.0);
        form.set_actual_quantity(1, 130.0);

        assert_eq!(form.shortage_amount(), 20000.0);
        assert_eq!(form.surplus_amount(), 900.0);
    }

    #[test]
    fn empty_sheet_is_rejected() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.warehouse_id = Some(catalog.warehouses()[0].id);

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("ведомость")));

        form.add_row();
        assert!(!form.validate().is_empty());
    }

    #[test]
    fn rows_can_all_be_removed() {
        let catalog = fixtures::catalog();
        let mut form = InventoryCountForm::new("2025-03-14");
        form.fill_by_stock(&catalog);
        form.remove_row(1);
        form.remove_row(0);
        assert!(form.rows.is_empty());
    }
}
