//! User-visible notifications, queued by the screen and drained by whatever
//! front-end renders them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: ToastVariant::Default }
    }

    #[must_use]
    pub fn error(description: &str) -> Self {
        Self { title: ERROR_TITLE.to_owned(), description: description.to_owned(), variant: ToastVariant::Destructive }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

pub const ERROR_TITLE: &str = "Ошибка";
pub const LOAD_FAILED: &str = "Не удалось загрузить подарочные коробки";
pub const ORDER_PLACED_TITLE: &str = "Заказ оформлен!";
pub const ORDER_PLACED: &str = "Мы свяжемся с вами в ближайшее время";
pub const ORDER_FAILED: &str = "Не удалось оформить заказ";

/// Notifications raised by a screen, oldest first.
///
/// The host drains them with [`ToastQueue::drain`] after each event.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pending: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.pending.push(toast);
    }

    #[must_use]
    pub fn pending(&self) -> &[Toast] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }
}
