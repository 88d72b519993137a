//! Безголовое ядро редакторов складских документов.
//!
//! Формы, проверка и отправка не зависят от UI: хостом может быть
//! Leptos-приложение, тестовый рантайм или что-то ещё. Хост внедряет
//! операцию сохранения и канал уведомлений, ядро отвечает за состояние
//! формы и правила пересчёта.

pub mod catalog;
pub mod documents;
pub mod notify;
pub mod shared;
pub mod submit;
