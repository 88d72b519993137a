use crate::journal::JournalPage;
use crate::layout::notices::{NoticeHost, NoticeService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сервис уведомлений доступен всему приложению через контекст
    provide_context(NoticeService::new());

    view! {
        <JournalPage />
        <NoticeHost />
    }
}
