use crate::layout::notices::NoticeService;
use crate::shared::format::{format_money, today_iso};
use crate::shared::icons::icon;
use contracts::domain::a001_partner::PartnerId;
use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a006_goods_receipt::{GoodsReceiptPayload, ReceiptReason};
use contracts::domain::common::AggregateId;
use editor::catalog::Catalog;
use editor::documents::a006_goods_receipt::GoodsReceiptForm;
use editor::submit::{submit, SaveFn, SubmitOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[component]
pub fn GoodsReceiptEditor(
    catalog: Catalog,
    save: SaveFn,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
    #[prop(optional)] existing: Option<GoodsReceiptPayload>,
) -> impl IntoView {
    let is_edit = existing.is_some();
    let form = RwSignal::new(match &existing {
        Some(payload) => GoodsReceiptForm::from_payload(payload),
        None => GoodsReceiptForm::new(today_iso()),
    });
    let errors = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let supplier_options: Vec<(String, String)> = catalog
        .suppliers()
        .map(|p| (p.id.as_string(), p.name.clone()))
        .collect();
    let warehouse_options: Vec<(String, String)> = catalog
        .warehouses()
        .iter()
        .map(|w| (w.id.as_string(), format!("{} {}", w.code, w.name)))
        .collect();
    let product_options: Vec<(String, String)> = catalog
        .products()
        .iter()
        .map(|p| (p.id.as_string(), format!("{} — {}", p.article, p.name)))
        .collect();
    let catalog = StoredValue::new(catalog);

    let handle_save = {
        let save = save.clone();
        let on_saved = on_saved.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            let save = save.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            spawn_local(async move {
                let snapshot = form.get_untracked();
                match submit(&snapshot, &save, &notices).await {
                    SubmitOutcome::Saved => {
                        saving.set(false);
                        errors.set(Vec::new());
                        (on_saved)(());
                    }
                    SubmitOutcome::Invalid(list) => {
                        errors.set(list);
                        saving.set(false);
                    }
                    SubmitOutcome::Failed(message) => {
                        errors.set(vec![message]);
                        saving.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if is_edit { "Оприходование товара — правка" } else { "Оприходование товара" }}</h3>
            </div>

            {move || {
                let list = errors.get();
                (!list.is_empty()).then(|| view! {
                    <div class="error">
                        <ul>
                            {list.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    </div>
                })
            }}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label>"Дата"</label>
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.document_date.clone())
                            on:change=move |ev| form.update(|f| f.document_date = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Поставщик"</label>
                        <select on:change=move |ev| {
                            if let Ok(id) = PartnerId::from_string(&event_target_value(&ev)) {
                                form.update(|f| f.supplier_id = Some(id));
                            }
                        }>
                            <option value="" selected=move || form.with(|f| f.supplier_id.is_none())>
                                "— не выбран —"
                            </option>
                            {supplier_options.iter().map(|(value, label)| {
                                let option_value = value.clone();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=option_value
                                        selected=move || form.with(|f| {
                                            f.supplier_id.map(|id| id.as_string()) == Some(selected_value.clone())
                                        })
                                    >
                                        {label.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Склад"</label>
                        <select on:change=move |ev| {
                            if let Ok(id) = WarehouseId::from_string(&event_target_value(&ev)) {
                                form.update(|f| f.warehouse_id = Some(id));
                            }
                        }>
                            <option value="" selected=move || form.with(|f| f.warehouse_id.is_none())>
                                "— не выбран —"
                            </option>
                            {warehouse_options.iter().map(|(value, label)| {
                                let option_value = value.clone();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=option_value
                                        selected=move || form.with(|f| {
                                            f.warehouse_id.map(|id| id.as_string()) == Some(selected_value.clone())
                                        })
                                    >
                                        {label.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Причина оприходования"</label>
                        <select on:change=move |ev| {
                            if let Some(reason) = ReceiptReason::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.set_reason(reason));
                            }
                        }>
                            {ReceiptReason::ALL.iter().map(|reason| {
                                let reason = *reason;
                                view! {
                                    <option
                                        value=reason.code()
                                        selected=move || form.with(|f| f.reason == reason)
                                    >
                                        {reason.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <table class="items-table">
                    <thead>
                        <tr>
                            <th>"Товар"</th>
                            <th class="num">"Кол-во"</th>
                            <th class="num">"Цена закупки"</th>
                            <th class="num">"Сумма"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each={move || (0..form.with(|f| f.rows.len())).collect::<Vec<_>>()}
                            key=|index| *index
                            children={
                                let product_options = product_options.clone();
                                move |index| {
                                    view! {
                                        <tr>
                                            <td>
                                                <select on:change=move |ev| {
                                                    if let Ok(id) = ProductId::from_string(&event_target_value(&ev)) {
                                                        catalog.with_value(|c| {
                                                            form.update(|f| f.select_product(index, id, c));
                                                        });
                                                    }
                                                }>
                                                    <option
                                                        value=""
                                                        selected=move || form.with(|f| {
                                                            f.rows.get(index).map(|r| r.product_id.is_none()).unwrap_or(true)
                                                        })
                                                    >
                                                        "— подберите товар —"
                                                    </option>
                                                    {product_options.iter().map(|(value, label)| {
                                                        let option_value = value.clone();
                                                        let selected_value = value.clone();
                                                        view! {
                                                            <option
                                                                value=option_value
                                                                selected=move || form.with(|f| {
                                                                    f.rows.get(index)
                                                                        .and_then(|r| r.product_id)
                                                                        .map(|id| id.as_string())
                                                                        == Some(selected_value.clone())
                                                                })
                                                            >
                                                                {label.clone()}
                                                            </option>
                                                        }
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                            <td class="num">
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="any"
                                                    prop:value=move || form.with(|f| {
                                                        f.rows.get(index).map(|r| r.quantity).unwrap_or(0.0).to_string()
                                                    })
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                                        form.update(|f| f.set_quantity(index, value));
                                                    }
                                                />
                                            </td>
                                            <td class="num">
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="any"
                                                    prop:value=move || form.with(|f| {
                                                        f.rows.get(index).map(|r| r.cost_price).unwrap_or(0.0).to_string()
                                                    })
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                                        form.update(|f| f.set_cost_price(index, value));
                                                    }
                                                />
                                            </td>
                                            <td class="num">
                                                {move || form.with(|f| {
                                                    f.rows.get(index).map(|r| format_money(r.total)).unwrap_or_default()
                                                })}
                                            </td>
                                            <td>
                                                <button
                                                    class="btn-icon"
                                                    title="Удалить строку"
                                                    on:click=move |_| form.update(|f| f.remove_row(index))
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="items-toolbar">
                    <button class="btn btn-secondary" on:click=move |_| form.update(|f| f.add_row())>
                        {icon("plus")}
                        "Добавить строку"
                    </button>
                    <span class="items-total">
                        "Итого: " {move || format_money(form.with(|f| f.total_amount()))}
                    </span>
                </div>

                <div class="form-group">
                    <label>"Комментарий"</label>
                    <textarea
                        rows="2"
                        prop:value=move || form.with(|f| f.note.clone())
                        on:input=move |ev| form.update(|f| f.note = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=handle_save disabled=move || saving.get()>
                    {icon("save")}
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    "Отмена"
                </button>
            </div>
        </div>
    }
}
