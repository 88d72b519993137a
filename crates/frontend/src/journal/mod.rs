//! Журнал складских документов — единственная страница приложения.
//!
//! Страница владеет загрузкой справочников и списка документов, а
//! редакторам передаёт снимок каталога и операцию сохранения. Сам
//! журнал ничего не знает о правилах пересчёта форм.

use crate::api;
use crate::domain::a006_goods_receipt::editor::GoodsReceiptEditor;
use crate::domain::a007_customer_return::editor::CustomerReturnEditor;
use crate::domain::a008_supplier_return::editor::SupplierReturnEditor;
use crate::domain::a009_internal_order::editor::InternalOrderEditor;
use crate::domain::a010_inventory_count::editor::InventoryCountEditor;
use crate::domain::a011_price_list::editor::PriceListEditor;
use crate::domain::a012_writeoff::editor::WriteoffEditor;
use crate::domain::a013_warehouse_transfer::editor::WarehouseTransferEditor;
use crate::shared::format::{format_date, format_money};
use crate::shared::modal_frame::ModalFrame;
use contracts::documents::{DocumentPayload, DocumentRecord};
use contracts::domain::a004_sales_invoice::SalesInvoice;
use contracts::domain::a005_purchase_invoice::PurchaseInvoice;
use editor::catalog::Catalog;
use editor::submit::{SaveError, SaveFn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

/// Семейства документов для кнопок создания
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    GoodsReceipt,
    CustomerReturn,
    SupplierReturn,
    InternalOrder,
    InventoryCount,
    PriceList,
    Writeoff,
    WarehouseTransfer,
}

impl DocumentKind {
    const ALL: [DocumentKind; 8] = [
        DocumentKind::GoodsReceipt,
        DocumentKind::CustomerReturn,
        DocumentKind::SupplierReturn,
        DocumentKind::InternalOrder,
        DocumentKind::InventoryCount,
        DocumentKind::PriceList,
        DocumentKind::Writeoff,
        DocumentKind::WarehouseTransfer,
    ];

    fn label(&self) -> &'static str {
        match self {
            DocumentKind::GoodsReceipt => "Оприходование",
            DocumentKind::CustomerReturn => "Возврат покупателя",
            DocumentKind::SupplierReturn => "Возврат поставщику",
            DocumentKind::InternalOrder => "Внутренний заказ",
            DocumentKind::InventoryCount => "Инвентаризация",
            DocumentKind::PriceList => "Прайс-лист",
            DocumentKind::Writeoff => "Списание",
            DocumentKind::WarehouseTransfer => "Перемещение",
        }
    }
}

/// Что открыто поверх журнала
#[derive(Clone, PartialEq)]
enum EditorTarget {
    Create(DocumentKind),
    Edit(DocumentRecord),
}

/// Операция сохранения для редактора: POST для нового документа,
/// PUT по ключу для правки. Текст ошибки сервера доходит до формы.
fn make_save(id: Option<String>) -> SaveFn {
    Rc::new(move |payload| {
        let id = id.clone();
        Box::pin(async move {
            api::documents::save_document(id.as_deref(), &payload)
                .await
                .map_err(SaveError::new)
        })
    })
}

fn editor_view(
    target: EditorTarget,
    catalog: Catalog,
    sales_invoices: Vec<SalesInvoice>,
    purchase_invoices: Vec<PurchaseInvoice>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    match target {
        EditorTarget::Create(kind) => {
            let save = make_save(None);
            match kind {
                DocumentKind::GoodsReceipt => view! {
                    <GoodsReceiptEditor catalog=catalog save=save on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                DocumentKind::CustomerReturn => view! {
                    <CustomerReturnEditor
                        catalog=catalog
                        invoices=sales_invoices
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any(),
                DocumentKind::SupplierReturn => view! {
                    <SupplierReturnEditor
                        catalog=catalog
                        invoices=purchase_invoices
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any(),
                DocumentKind::InternalOrder => view! {
                    <InternalOrderEditor catalog=catalog save=save on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                DocumentKind::InventoryCount => view! {
                    <InventoryCountEditor catalog=catalog save=save on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                DocumentKind::PriceList => view! {
                    <PriceListEditor catalog=catalog save=save on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                DocumentKind::Writeoff => view! {
                    <WriteoffEditor catalog=catalog save=save on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                DocumentKind::WarehouseTransfer => view! {
                    <WarehouseTransferEditor catalog=catalog save=save on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
            }
        }
        EditorTarget::Edit(record) => {
            let DocumentRecord { id, payload } = record;
            let save = make_save(Some(id));
            match payload {
                DocumentPayload::GoodsReceipt(p) => view! {
                    <GoodsReceiptEditor
                        catalog=catalog
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::CustomerReturn(p) => view! {
                    <CustomerReturnEditor
                        catalog=catalog
                        invoices=sales_invoices
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::SupplierReturn(p) => view! {
                    <SupplierReturnEditor
                        catalog=catalog
                        invoices=purchase_invoices
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::InternalOrder(p) => view! {
                    <InternalOrderEditor
                        catalog=catalog
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::InventoryCount(p) => view! {
                    <InventoryCountEditor
                        catalog=catalog
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::PriceList(p) => view! {
                    <PriceListEditor
                        catalog=catalog
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::Writeoff(p) => view! {
                    <WriteoffEditor
                        catalog=catalog
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
                DocumentPayload::WarehouseTransfer(p) => view! {
                    <WarehouseTransferEditor
                        catalog=catalog
                        save=save
                        on_saved=on_saved
                        on_cancel=on_cancel
                        existing=p
                    />
                }
                .into_any(),
            }
        }
    }
}

#[component]
pub fn JournalPage() -> impl IntoView {
    let documents = RwSignal::new(Vec::<DocumentRecord>::new());
    let catalog = RwSignal::new(Option::<Catalog>::None);
    let sales_invoices = RwSignal::new(Vec::<SalesInvoice>::new());
    let purchase_invoices = RwSignal::new(Vec::<PurchaseInvoice>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let open = RwSignal::new(Option::<EditorTarget>::None);

    let load_documents = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::documents::fetch_documents().await {
                Ok(items) => {
                    documents.set(items);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Справочники и накладные-основания грузятся один раз при монтировании
    let bootstrapped = StoredValue::new(false);
    Effect::new(move |_| {
        if bootstrapped.get_value() {
            return;
        }
        bootstrapped.set_value(true);
        load_documents();
        spawn_local(async move {
            match api::catalog::load_catalog().await {
                Ok(loaded) => catalog.set(Some(loaded)),
                Err(e) => set_error.set(Some(e)),
            }
            match api::catalog::fetch_sales_invoices().await {
                Ok(list) => sales_invoices.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            match api::catalog::fetch_purchase_invoices().await {
                Ok(list) => purchase_invoices.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Журнал документов"</h1>
                    <span class="badge">{move || documents.with(|d| d.len())}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_documents()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__toolbar">
                <Flex gap=FlexGap::Small>
                    {DocumentKind::ALL
                        .iter()
                        .map(|kind| {
                            let kind = *kind;
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=Signal::derive(move || catalog.with(|c| c.is_none()))
                                    on_click=move |_| open.set(Some(EditorTarget::Create(kind)))
                                >
                                    {kind.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Flex>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <Show when=move || loading.get() && documents.with(|d| d.is_empty())>
                <Spinner />
            </Show>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Дата"</TableHeaderCell>
                            <TableHeaderCell>"Документ"</TableHeaderCell>
                            <TableHeaderCell>"Сумма"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || documents.get()
                            key=|record| record.id.clone()
                            children=move |record| {
                                let date_text = format_date(record.payload.document_date());
                                let type_label = record.payload.type_label();
                                let total_text = format_money(record.payload.total());
                                let status_text = record.payload.status_label();
                                let record_for_open = record.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{date_text}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        open.set(Some(EditorTarget::Edit(record_for_open.clone())));
                                                    }
                                                >
                                                    {type_label}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{total_text}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_text}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            {move || {
                match (open.get(), catalog.get()) {
                    (Some(target), Some(loaded)) => {
                        let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                            open.set(None);
                            load_documents();
                        });
                        let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| open.set(None));
                        let editor = editor_view(
                            target,
                            loaded,
                            sales_invoices.get_untracked(),
                            purchase_invoices.get_untracked(),
                            on_saved,
                            on_cancel,
                        );
                        view! {
                            <ModalFrame
                                on_close=Callback::new(move |_| open.set(None))
                                modal_class="modal--document"
                            >
                                {editor}
                            </ModalFrame>
                        }
                        .into_any()
                    }
                    _ => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}
