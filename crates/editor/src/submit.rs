//! Отправка документа: проверка, вызов внешнего сохранения, уведомления.
//!
//! Само сохранение редактору не принадлежит: хост передаёт асинхронную
//! операцию (`SaveFn`), а редактор лишь решает, можно ли её вызывать,
//! и как сообщить об исходе.

use crate::notify::Notifier;
use contracts::documents::DocumentPayload;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Запасной текст для сбоев без сообщения
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

/// Ошибка внешнего обработчика сохранения
#[derive(Debug, Clone, PartialEq)]
pub struct SaveError {
    /// Текст ошибки; None и пустая строка равнозначны
    pub message: Option<String>,
}

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn unknown() -> Self {
        Self { message: None }
    }

    /// Текст для уведомления; без внятного сообщения подставляется запасной
    pub fn display_message(&self) -> String {
        match &self.message {
            Some(m) if !m.trim().is_empty() => m.clone(),
            _ => UNKNOWN_ERROR.to_string(),
        }
    }
}

/// Будущее результата сохранения. Локальное, без Send: основной хост — wasm
pub type SaveFuture = Pin<Box<dyn Future<Output = Result<(), SaveError>>>>;

/// Внедряемая асинхронная операция сохранения документа
pub type SaveFn = Rc<dyn Fn(DocumentPayload) -> SaveFuture>;

/// Общий контракт формы документа
pub trait DocumentForm {
    /// Список ошибок; пустой список — единственное разрешение на отправку
    fn validate(&self) -> Vec<String>;

    /// Тело документа; None, пока не выбраны обязательные ссылки шапки.
    /// После `validate()` без ошибок результат всегда Some.
    fn payload(&self) -> Option<DocumentPayload>;
}

/// Исход попытки отправки
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Документ сохранён; редактор можно закрывать
    Saved,
    /// Проверка не пройдена; сохранение не вызывалось
    Invalid(Vec<String>),
    /// Обработчик сохранения вернул ошибку; редактор остаётся открытым
    Failed(String),
}

/// Проверить форму и передать собранный документ обработчику сохранения.
/// Непустой список ошибок блокирует отправку целиком.
pub async fn submit(
    form: &dyn DocumentForm,
    save: &SaveFn,
    notifier: &dyn Notifier,
) -> SubmitOutcome {
    let errors = form.validate();
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }

    // Сюда попадаем только при рассинхроне validate() со сборкой тела
    let Some(payload) = form.payload() else {
        return SubmitOutcome::Invalid(vec!["Документ заполнен не полностью".to_string()]);
    };

    let label = payload.type_label();
    log::debug!("Отправка документа: {}", payload.document_type());

    match (save)(payload).await {
        Ok(()) => {
            notifier.success(&format!("{}: документ сохранён", label));
            SubmitOutcome::Saved
        }
        Err(e) => {
            let message = e.display_message();
            notifier.error(&message);
            SubmitOutcome::Failed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::documents::a006_goods_receipt::GoodsReceiptForm;
    use crate::documents::a009_internal_order::InternalOrderForm;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingNotifier {
        success: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.success.borrow_mut().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn save_handler(calls: Rc<Cell<usize>>, result: Result<(), SaveError>) -> SaveFn {
        Rc::new(move |_payload| {
            calls.set(calls.get() + 1);
            let result = result.clone();
            Box::pin(async move { result })
        })
    }

    fn valid_receipt() -> GoodsReceiptForm {
        let catalog = fixtures::catalog();
        let mut form = GoodsReceiptForm::new("2025-03-14");
        form.supplier_id = catalog.suppliers().next().map(|p| p.id);
        form.warehouse_id = Some(catalog.warehouses()[0].id);
        form.select_product(0, catalog.products()[1].id, &catalog);
        form.set_quantity(0, 10.0);
        form.set_cost_price(0, 1500.0);
        form
    }

    #[tokio::test]
    async fn success_notifies_and_reports_saved() {
        let calls = Rc::new(Cell::new(0));
        let save = save_handler(calls.clone(), Ok(()));
        let notifier = RecordingNotifier::default();

        let outcome = submit(&valid_receipt(), &save, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(calls.get(), 1);
        assert_eq!(notifier.success.borrow().len(), 1);
        assert!(notifier.errors.borrow().is_empty());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_save() {
        let calls = Rc::new(Cell::new(0));
        let save = save_handler(calls.clone(), Ok(()));
        let notifier = RecordingNotifier::default();

        let form = GoodsReceiptForm::new("2025-03-14");
        let outcome = submit(&form, &save, &notifier).await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert!(!errors.is_empty()),
            other => panic!("ожидалась блокировка проверкой, получено {:?}", other),
        }
        assert_eq!(calls.get(), 0);
        assert!(notifier.success.borrow().is_empty());
    }

    #[tokio::test]
    async fn matching_warehouses_block_submission() {
        let calls = Rc::new(Cell::new(0));
        let save = save_handler(calls.clone(), Ok(()));
        let notifier = RecordingNotifier::default();

        let catalog = fixtures::catalog();
        let mut form = InternalOrderForm::new("2025-03-14");
        let warehouse = catalog.warehouses()[0].id;
        form.source_warehouse_id = Some(warehouse);
        form.dest_warehouse_id = Some(warehouse);
        form.purpose = "Пополнение розницы".to_string();
        form.select_product(0, catalog.products()[0].id, &catalog);
        form.set_quantity(0, 2.0);

        let outcome = submit(&form, &save, &notifier).await;

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.contains("различаться")));
            }
            other => panic!("ожидалась блокировка проверкой, получено {:?}", other),
        }
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn save_error_message_goes_to_notifier() {
        let calls = Rc::new(Cell::new(0));
        let save = save_handler(calls.clone(), Err(SaveError::new("Склад закрыт на ревизию")));
        let notifier = RecordingNotifier::default();

        let outcome = submit(&valid_receipt(), &save, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Склад закрыт на ревизию".to_string()));
        assert_eq!(notifier.errors.borrow().as_slice(), ["Склад закрыт на ревизию"]);
    }

    #[tokio::test]
    async fn blank_save_error_falls_back_to_unknown() {
        let calls = Rc::new(Cell::new(0));
        let save = save_handler(calls.clone(), Err(SaveError::unknown()));
        let notifier = RecordingNotifier::default();

        let outcome = submit(&valid_receipt(), &save, &notifier).await;
        assert_eq!(outcome, SubmitOutcome::Failed(UNKNOWN_ERROR.to_string()));

        let save = save_handler(calls.clone(), Err(SaveError::new("   ")));
        let outcome = submit(&valid_receipt(), &save, &notifier).await;
        assert_eq!(outcome, SubmitOutcome::Failed(UNKNOWN_ERROR.to_string()));
    }
}
