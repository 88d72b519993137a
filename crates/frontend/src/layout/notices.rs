use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Через сколько миллисекунд уведомление убирается само
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Всплывающее уведомление
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Сервис для централизованного показа уведомлений
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| list.push(Notice { id, kind, text }));

        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            notices.update(|list| list.retain(|n| n.id != id));
        });
    }
}

/// Уведомления из безголового ядра редактора идут в тот же стек
impl editor::notify::Notifier for NoticeService {
    fn success(&self, message: &str) {
        NoticeService::success(self, message);
    }

    fn error(&self, message: &str) {
        NoticeService::error(self, message);
    }
}

/// Стек уведомлений в углу экрана
#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_context::<NoticeService>().expect("NoticeService not provided in context");

    view! {
        <div class="notices">
            <For
                each=move || service.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
