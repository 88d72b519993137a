use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Обёртка модального окна: подложка плюс поверхность.
///
/// Шапку и кнопки не рисует — содержимое редактора само решает,
/// как выглядеть.
#[component]
pub fn ModalFrame(
    /// Вызывается, когда окно пора закрыть (клик по подложке)
    on_close: Callback<()>,
    /// Дополнительный класс поверхности (`div.modal`)
    #[prop(optional, into)]
    modal_class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываемся только если и нажатие, и отпускание пришлись на подложку:
    // иначе выделение текста в окне с отпусканием снаружи закрывало бы его.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Закрытие откладывается на следующий тик: синхронное снятие
                // подложки во время её собственного click ломает делегирование
                // событий в Leptos.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || {
                    if let Some(cls) = modal_class.get() {
                        format!("modal {cls}")
                    } else {
                        "modal".to_string()
                    }
                }
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
