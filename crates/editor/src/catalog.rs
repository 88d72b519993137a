//! Снимок справочников, с которым работает открытый редактор.

use chrono::{DateTime, Utc};
use contracts::domain::a001_partner::{Partner, PartnerId};
use contracts::domain::a002_product::{Product, ProductId};
use contracts::domain::a003_warehouse::{Warehouse, WarehouseId};

/// Справочники на момент открытия редактора.
///
/// Выбор позиции копирует поля из снимка в строку; последующие изменения
/// справочников на уже набранные строки не влияют. Снимок запрашивается
/// один раз при монтировании редактора.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    partners: Vec<Partner>,
    products: Vec<Product>,
    warehouses: Vec<Warehouse>,
    fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(
        partners: Vec<Partner>,
        products: Vec<Product>,
        warehouses: Vec<Warehouse>,
    ) -> Self {
        Self {
            partners,
            products,
            warehouses,
            fetched_at: Utc::now(),
        }
    }

    /// Момент получения снимка
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn partner(&self, id: &PartnerId) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == *id)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    pub fn warehouse(&self, id: &WarehouseId) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == *id)
    }

    /// Контрагенты-покупатели, включая универсальных
    pub fn customers(&self) -> impl Iterator<Item = &Partner> {
        self.partners.iter().filter(|p| p.kind.is_customer())
    }

    /// Контрагенты-поставщики, включая универсальных
    pub fn suppliers(&self) -> impl Iterator<Item = &Partner> {
        self.partners.iter().filter(|p| p.kind.is_supplier())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    /// Товары с ненулевым учётным остатком — источник для
    /// «Заполнить по остаткам». Отрицательный остаток тоже попадает
    /// в ведомость: его как раз и нужно пересчитать.
    pub fn products_with_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.stock != 0.0)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use contracts::domain::a001_partner::PartnerKind;
    use uuid::Uuid;

    pub fn partner(code: &str, name: &str, kind: PartnerKind) -> Partner {
        Partner {
            id: PartnerId::new(Uuid::new_v4()),
            code: code.to_string(),
            name: name.to_string(),
            kind,
        }
    }

    pub fn product(article: &str, name: &str, selling: f64, cost: f64, stock: f64) -> Product {
        Product {
            id: ProductId::new(Uuid::new_v4()),
            article: article.to_string(),
            name: name.to_string(),
            unit: "шт".to_string(),
            selling_price: selling,
            cost_price: cost,
            stock,
        }
    }

    pub fn warehouse(code: &str, name: &str) -> Warehouse {
        Warehouse {
            id: WarehouseId::new(Uuid::new_v4()),
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// Триада справочников для тестов форм: ровно два товара с ненулевым
    /// остатком, два склада, контрагенты всех ролей.
    pub fn catalog() -> Catalog {
        Catalog::new(
            vec![
                partner("КА-000001", "ООО Ромашка", PartnerKind::Customer),
                partner("КА-000002", "ИП Фёдоров", PartnerKind::Supplier),
                partner("КА-000003", "ООО Вектор", PartnerKind::Both),
            ],
            vec![
                product("АРТ-00101", "Дрель аккумуляторная", 12500.0, 10000.0, 5.0),
                product("АРТ-00102", "Перчатки рабочие", 150.0, 90.0, 120.0),
                product("АРТ-00103", "Кабель силовой ВВГ", 4200.0, 3600.0, 0.0),
                product("АРТ-00104", "Пакет фасовочный", 10.0, 10.0, 0.0),
            ],
            vec![
                warehouse("СКЛ-01", "Основной склад"),
                warehouse("СКЛ-02", "Розничный склад"),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn both_kind_partners_appear_in_either_list() {
        let catalog = fixtures::catalog();
        let customers: Vec<_> = catalog.customers().map(|p| p.name.clone()).collect();
        let suppliers: Vec<_> = catalog.suppliers().map(|p| p.name.clone()).collect();
        assert!(customers.contains(&"ООО Ромашка".to_string()));
        assert!(customers.contains(&"ООО Вектор".to_string()));
        assert!(!customers.contains(&"ИП Фёдоров".to_string()));
        assert!(suppliers.contains(&"ИП Фёдоров".to_string()));
        assert!(suppliers.contains(&"ООО Вектор".to_string()));
    }

    #[test]
    fn stock_filter_drops_zero_balances() {
        let catalog = fixtures::catalog();
        let names: Vec<_> = catalog.products_with_stock().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Дрель аккумуляторная", "Перчатки рабочие"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = fixtures::catalog();
        let id = catalog.products()[0].id;
        assert_eq!(catalog.product(&id).map(|p| p.name.as_str()), Some("Дрель аккумуляторная"));
    }
}
