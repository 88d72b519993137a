use crate::domain::a002_product::ProductId;
use serde::{Deserialize, Serialize};

/// Жизненный цикл прайс-листа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceListStatus {
    Draft,
    Active,
    Archived,
}

impl PriceListStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PriceListStatus::Draft => "Черновик",
            PriceListStatus::Active => "Действует",
            PriceListStatus::Archived => "В архиве",
        }
    }

    /// Допустимые переходы: черновик активируется или сразу в архив,
    /// действующий лист уходит только в архив. Из архива возврата нет.
    pub fn can_transition(&self, to: PriceListStatus) -> bool {
        use PriceListStatus::*;
        matches!(
            (self, to),
            (Draft, Active) | (Draft, Archived) | (Active, Archived)
        )
    }
}

/// Строка прайс-листа: старая и новая цена позиции
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceListLine {
    pub product_id: ProductId,

    /// Наименование на момент выбора
    pub product_name: String,

    /// Себестоимость — база для наценки
    pub cost_price: f64,

    /// Розничная цена до изменения
    pub old_price: f64,

    /// Назначаемая цена
    pub new_price: f64,

    /// Изменение в процентах от old_price, округлённое до сотых
    pub price_change_pct: f64,
}

/// Документ «Прайс-лист» (a011) — тело для сохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListPayload {
    /// Название листа (напр. "Розница, осень")
    pub name: String,

    /// Дата начала действия (YYYY-MM-DD)
    pub effective_date: String,

    pub note: String,

    pub items: Vec<PriceListLine>,

    pub status: PriceListStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archived_is_terminal() {
        use PriceListStatus::*;
        for to in [Draft, Active, Archived] {
            assert!(!Archived.can_transition(to));
        }
    }

    #[test]
    fn draft_activates_and_archives() {
        use PriceListStatus::*;
        assert!(Draft.can_transition(Active));
        assert!(Draft.can_transition(Archived));
        assert!(Active.can_transition(Archived));
        assert!(!Active.can_transition(Draft));
        assert!(!Draft.can_transition(Draft));
    }
}
