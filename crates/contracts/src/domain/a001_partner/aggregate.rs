use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для справочника Контрагенты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartnerId(pub Uuid);

impl PartnerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PartnerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PartnerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Роль контрагента в документообороте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerKind {
    Customer,
    Supplier,
    /// И покупатель, и поставщик — попадает в обе выборки
    Both,
}

impl PartnerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PartnerKind::Customer => "Покупатель",
            PartnerKind::Supplier => "Поставщик",
            PartnerKind::Both => "Покупатель и поставщик",
        }
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, PartnerKind::Customer | PartnerKind::Both)
    }

    pub fn is_supplier(&self) -> bool {
        matches!(self, PartnerKind::Supplier | PartnerKind::Both)
    }
}

/// Контрагент (справочник a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,

    /// Код (напр. "КА-000012")
    pub code: String,

    /// Наименование
    pub name: String,

    pub kind: PartnerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_id_round_trip() {
        let id = PartnerId::new(Uuid::new_v4());
        let parsed = PartnerId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn partner_id_rejects_garbage() {
        assert!(PartnerId::from_string("не-uuid").is_err());
    }

    #[test]
    fn both_kind_matches_either_role() {
        assert!(PartnerKind::Both.is_customer());
        assert!(PartnerKind::Both.is_supplier());
        assert!(!PartnerKind::Supplier.is_customer());
        assert!(!PartnerKind::Customer.is_supplier());
    }
}
