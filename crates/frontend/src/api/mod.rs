//! Клиенты API сервера документов.

pub mod catalog;
pub mod documents;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// GET с разбором JSON-ответа
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}
