//! Чтение и сохранение документов журнала.

use super::get_json;
use crate::shared::api_utils::api_base;
use contracts::documents::{DocumentPayload, DocumentRecord};
use gloo_net::http::Request;

pub async fn fetch_documents() -> Result<Vec<DocumentRecord>, String> {
    get_json(&format!("{}/api/documents", api_base())).await
}

/// Сохранить документ: POST для нового, PUT для правки существующего.
///
/// Текст ошибки берётся из поля `message` тела ответа; без него
/// остаётся код состояния.
pub async fn save_document(id: Option<&str>, payload: &DocumentPayload) -> Result<(), String> {
    let request = match id {
        Some(id) => Request::put(&format!("{}/api/documents/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/documents", api_base())),
    };
    let response = request
        .json(payload)
        .map_err(|e| format!("Ошибка сериализации: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !response.ok() {
        let fallback = format!("HTTP {}", response.status());
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(fallback);
        return Err(message);
    }
    Ok(())
}
