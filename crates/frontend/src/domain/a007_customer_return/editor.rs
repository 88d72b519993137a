use crate::layout::notices::NoticeService;
use crate::shared::format::{format_date, format_money, today_iso};
use crate::shared::icons::icon;
use contracts::domain::a003_warehouse::WarehouseId;
use contracts::domain::a004_sales_invoice::{SalesInvoice, SalesInvoiceId};
use contracts::domain::a007_customer_return::{CustomerReturnPayload, ReturnReason};
use contracts::domain::common::AggregateId;
use editor::catalog::Catalog;
use editor::documents::a007_customer_return::CustomerReturnForm;
use editor::submit::{submit, SaveFn, SubmitOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Возврат от покупателя. Таблица не набирается вручную: строки приходят
/// из накладной-основания, редактируются только количество и причина.
#[component]
pub fn CustomerReturnEditor(
    catalog: Catalog,
    invoices: Vec<SalesInvoice>,
    save: SaveFn,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
    #[prop(optional)] existing: Option<CustomerReturnPayload>,
) -> impl IntoView {
    let is_edit = existing.is_some();
    let form = RwSignal::new(match &existing {
        Some(payload) => CustomerReturnForm::from_payload(payload),
        None => CustomerReturnForm::new(today_iso()),
    });
    let errors = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let invoice_options: Vec<(String, String)> = invoices
        .iter()
        .map(|inv| {
            (
                inv.id.as_string(),
                format!("№{} от {} — {}", inv.number, format_date(&inv.date), inv.customer_name),
            )
        })
        .collect();
    let warehouse_options: Vec<(String, String)> = catalog
        .warehouses()
        .iter()
        .map(|w| (w.id.as_string(), format!("{} {}", w.code, w.name)))
        .collect();
    let catalog = StoredValue::new(catalog);
    let invoices = StoredValue::new(invoices);

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
                <h3>{if is_edit { "Возврат от покупателя — правка" } else { "Возврат от покупателя" }}</h3>
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
                        <label>"Накладная-основание"</label>
                        // Смена основания пересобирает форму целиком, дата сохраняется
                        <select on:change=move |ev| {
                            if let Ok(id) = SalesInvoiceId::from_string(&event_target_value(&ev)) {
                                invoices.with_value(|list| {
                                    if let Some(invoice) = list.iter().find(|inv| inv.id == id) {
                                        form.update(|f| {
                                            let date = f.document_date.clone();
                                            *f = CustomerReturnForm::from_invoice(invoice, date);
                                        });
                                    }
                                });
                            }
                        }>
                            <option value="" selected=move || form.with(|f| f.invoice_id.is_none())>
                                "— выберите накладную —"
                            </option>
                            {invoice_options.iter().map(|(value, label)| {
                                let option_value = value.clone();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=option_value
                                        selected=move || form.with(|f| {
                                            f.invoice_id.map(|id| id.as_string()) == Some(selected_value.clone())
                                        })
                                    >
                                        {label.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Покупатель"</label>
                        <input
                            type="text"
                            readonly
                            prop:value=move || {
                                catalog.with_value(|c| form.with(|f| {
                                    f.customer_id
                                        .and_then(|id| c.partner(&id))
                                        .map(|p| p.name.clone())
                                        .unwrap_or_default()
                                }))
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>"Склад возврата"</label>
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
                </div>

                <table class="items-table">
                    <thead>
                        <tr>
                            <th>"Товар"</th>
                            <th class="num">"Отгружено"</th>
                            <th class="num">"К возврату"</th>
                            <th class="num">"Цена"</th>
                            <th class="num">"Сумма"</th>
                            <th>"Причина"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each={move || (0..form.with(|f| f.rows.len())).collect::<Vec<_>>()}
                            key=|index| *index
                            children=move |index| {
                                view! {
                                    <tr>
                                        <td>
                                            {move || form.with(|f| {
                                                f.rows.get(index)
                                                    .map(|r| format!("{} ({})", r.product_name, r.unit))
                                                    .unwrap_or_default()
                                            })}
                                        </td>
                                        <td class="num">
                                            {move || form.with(|f| {
                                                f.rows.get(index).map(|r| r.max_quantity.to_string()).unwrap_or_default()
                                            })}
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
                                            {move || form.with(|f| {
                                                f.rows.get(index).map(|r| format_money(r.price)).unwrap_or_default()
                                            })}
                                        </td>
                                        <td class="num">
                                            {move || form.with(|f| {
                                                f.rows.get(index).map(|r| format_money(r.total)).unwrap_or_default()
                                            })}
                                        </td>
                                        <td>
                                            <select on:change=move |ev| {
                                                let reason = ReturnReason::from_code(&event_target_value(&ev));
                                                form.update(|f| f.set_reason(index, reason));
                                            }>
                                                <option
                                                    value=""
                                                    selected=move || form.with(|f| {
                                                        f.rows.get(index).map(|r| r.reason.is_none()).unwrap_or(true)
                                                    })
                                                >
                                                    "—"
                                                </option>
                                                {ReturnReason::ALL.iter().map(|reason| {
                                                    let reason = *reason;
                                                    view! {
                                                        <option
                                                            value=reason.code()
                                                            selected=move || form.with(|f| {
                                                                f.rows.get(index)
                                                                    .map(|r| r.reason == Some(reason))
                                                                    .unwrap_or(false)
                                                            })
                                                        >
                                                            {reason.label()}
                                                        </option>
                                                    }
                                                }).collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="items-toolbar">
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
