use serde::{Deserialize, Serialize};

/// Состояние документа без особого жизненного цикла.
/// Редактор всегда создаёт документы черновиками; проведение выполняет сервер.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Posted,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Черновик",
            DocumentStatus::Posted => "Проведён",
        }
    }
}
