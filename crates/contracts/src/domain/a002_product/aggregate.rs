use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для справочника Номенклатура
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Товар (справочник a002)
///
/// Цены и остаток отдаются сервером на момент запроса; редактор работает
/// со снимком и копирует нужные поля в строку при выборе.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Артикул (напр. "АРТ-00427")
    pub article: String,

    /// Наименование
    pub name: String,

    /// Единица измерения ("шт", "кг", "упак")
    pub unit: String,

    /// Текущая розничная цена
    pub selling_price: f64,

    /// Себестоимость
    pub cost_price: f64,

    /// Остаток на складах
    pub stock: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_round_trip() {
        let id = ProductId::new(Uuid::new_v4());
        assert_eq!(ProductId::from_string(&id.as_string()), Ok(id));
    }
}
