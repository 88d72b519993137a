use crate::catalog::Catalog;
use crate::shared::numbers::{round2, zero_floor};
use crate::submit::DocumentForm;
use contracts::documents::DocumentPayload;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a011_price_list::{PriceListLine, PriceListPayload, PriceListStatus};

/// Строка прайс-листа
#[derive(Debug, Clone, PartialEq)]
pub struct PriceListRow {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    /// Себестоимость — база для наценки
    pub cost_price: f64,
    /// Розничная цена на момент подбора
    pub old_price: f64,
    pub new_price: f64,
    /// Изменение к старой цене в процентах, округлено до сотых
    pub price_change_pct: f64,
}

impl PriceListRow {
    fn empty() -> Self {
        Self {
            product_id: None,
            product_name: String::new(),
            cost_price: 0.0,
            old_price: 0.0,
            new_price: 0.0,
            price_change_pct: 0.0,
        }
    }

    /// При нулевой старой цене процент изменения не определён — держим ноль
    fn recalc_change(&mut self) {
        self.price_change_pct = if self.old_price > 0.0 {
            round2((self.new_price - self.old_price) / self.old_price * 100.0)
        } else {
            0.0
        };
    }

    fn is_resolved(&self) -> bool {
        self.product_id.is_some()
    }
}

/// Форма документа «Прайс-лист»
#[derive(Debug, Clone, PartialEq)]
pub struct PriceListForm {
    /// Название листа (напр. "Розница, осень")
    pub name: String,
    /// Дата начала действия (YYYY-MM-DD)
    pub effective_date: String,
    pub note: String,
    pub rows: Vec<PriceListRow>,
}

impl PriceListForm {
    /// Пустая форма с одной незаполненной строкой
    pub fn new(effective_date: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            effective_date: effective_date.into(),
            note: String::new(),
            rows: vec![PriceListRow::empty()],
        }
    }

    /// Восстановить форму из сохранённого документа (режим правки)
    pub fn from_payload(payload: &PriceListPayload) -> Self {
        let rows = payload
            .items
            .iter()
            .map(|line| PriceListRow {
                product_id: Some(line.product_id),
                product_name: line.product_name.clone(),
                cost_price: line.cost_price,
                old_price: line.old_price,
                new_price: line.new_price,
                price_change_pct: line.price_change_pct,
            })
            .collect::<Vec<_>>();
        Self {
            name: payload.name.clone(),
            effective_date: payload.effective_date.clone(),
            note: payload.note.clone(),
            rows: if rows.is_empty() {
                vec![PriceListRow::empty()]
            } else {
                rows
            },
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(PriceListRow::empty());
    }

    /// Последняя строка не удаляется
    pub fn remove_row(&mut self, index: usize) {
        if self.rows.len() > 1 && index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Подбор товара: старая и новая цена начинаются с текущей розничной,
    /// себестоимость копируется как база для наценки.
    pub fn select_product(&mut self, index: usize, id: ProductId, catalog: &Catalog) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let Some(product) = catalog.product(&id) else {
            return;
        };
        row.product_id = Some(id);
        row.product_name = product.name.clone();
        row.cost_price = product.cost_price;
        row.old_price = product.selling_price;
        row.new_price = product.selling_price;
        row.price_change_pct = 0.0;
    }

    pub fn set_new_price(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.new_price = zero_floor(value);
            row.recalc_change();
        }
    }

    /// Массовая наценка от себестоимости: каждой подобранной позиции
    /// назначается new_price = round2(cost * (1 + pct/100)). Пустые
    /// строки-заготовки не трогаются.
    pub fn apply_markup(&mut self, percent: f64) {
        let factor = 1.0 + percent / 100.0;
        for row in self.rows.iter_mut().filter(|r| r.is_resolved()) {
            row.new_price = round2(row.cost_price * factor);
            row.recalc_change();
        }
    }
}

impl DocumentForm for PriceListForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Укажите название прайс-листа".to_string());
        }
        if self.effective_date.trim().is_empty() {
            errors.push("Укажите дату начала действия".to_string());
        }
        if !self.rows.iter().any(|r| r.is_resolved()) {
            errors.push("Добавьте хотя бы одну позицию".to_string());
        }
        errors
    }

    fn payload(&self) -> Option<DocumentPayload> {
        let items = self
            .rows
            .iter()
            .filter_map(|row| {
                let product_id = row.product_id?;
                Some(PriceListLine {
                    product_id,
                    product_name: row.product_name.clone(),
                    cost_price: row.cost_price,
                    old_price: row.old_price,
                    new_price: row.new_price,
                    price_change_pct: row.price_change_pct,
                })
            })
            .collect::<Vec<_>>();
        Some(DocumentPayload::PriceList(PriceListPayload {
            name: self.name.clone(),
            effective_date: self.effective_date.clone(),
            note: self.note.clone(),
            items,
            status: PriceListStatus::Draft,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn markup_writes_cost_plus_percent() {
        let catalog = fixtures::catalog();
        let mut form = PriceListForm::new("2025-04-01");
        // Дрель: себестоимость 10000, розница 12500
        form.select_product(0, catalog.products()[0].id, &catalog);

        form.apply_markup(20.0);

        assert_eq!(form.rows[0].new_price, 12000.0);
        assert_eq!(form.rows[0].price_change_pct, -4.0);
    }

    #[test]
    fn zero_markup_keeps_price_where_old_equals_cost() {
        let catalog = fixtures::catalog();
        let mut form = PriceListForm::new("2025-04-01");
        // Пакет фасовочный: розница равна себестоимости (10 = 10)
        form.select_product(0, catalog.products()[3].id, &catalog);
        let before = form.rows[0].clone();

        form.apply_markup(0.0);

        assert_eq!(form.rows[0].new_price, before.old_price);
        assert_eq!(form.rows[0].price_change_pct, 0.0);
    }

    #[test]
    fn markup_skips_blank_rows() {
        let catalog = fixtures::catalog();
        let mut form = PriceListForm::new("2025-04-01");
        form.select_product(0, catalog.products()[1].id, &catalog);
        form.add_row();

        form.apply_markup(50.0);

        assert_eq!(form.rows[0].new_price, 135.0);
        assert_eq!(form.rows[1].new_price, 0.0);
        assert!(form.rows[1].product_id.is_none());
    }

    #[test]
    fn manual_price_edit_tracks_change_pct() {
        let catalog = fixtures::catalog();
        let mut form = PriceListForm::new("2025-04-01");
        form.select_product(0, catalog.products()[0].id, &catalog);

        form.set_new_price(0, 15000.0);
        assert_eq!(form.rows[0].price_change_pct, 20.0);

        form.set_new_price(0, 12500.0);
        assert_eq!(form.rows[0].price_change_pct, 0.0);
    }

    #[test]
    fn zero_old_price_leaves_change_undefined_at_zero() {
        let mut row = PriceListRow {
            product_id: None,
            product_name: String::new(),
            cost_price: 0.0,
            old_price: 0.0,
            new_price: 500.0,
            price_change_pct: 0.0,
        };
        row.recalc_change();
        assert_eq!(row.price_change_pct, 0.0);
    }

    #[test]
    fn nameless_list_is_rejected() {
        let catalog = fixtures::catalog();
        let mut form = PriceListForm::new("2025-04-01");
        form.select_product(0, catalog.products()[0].id, &catalog);

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("название")));

        form.name = "Розница, весна".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn payload_opens_as_draft() {
        let catalog = fixtures::catalog();
        let mut form = PriceListForm::new("2025-04-01");
        form.name = "Розница, весна".to_string();
        form.select_product(0, catalog.products()[0].id, &catalog);

        match form.payload() {
            Some(DocumentPayload::PriceList(p)) => {
                assert_eq!(p.status, PriceListStatus::Draft);
                assert_eq!(p.items.len(), 1);
            }
            other => panic!("неожиданное тело документа: {:?}", other),
        }
    }
}
