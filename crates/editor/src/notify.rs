//! Канал уведомлений редактора.

/// Возможность показать уведомление пользователю. Хост передаёт свою
/// реализацию: в приложении это тосты, в тестах — накопитель сообщений.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Реализация «в никуда» для хостов без интерфейса уведомлений
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
