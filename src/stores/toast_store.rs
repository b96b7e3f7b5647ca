use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use yew::prelude::*;

use crate::routes::Route;

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// Optional link rendered inside the toast ("View cart")
    pub action: Option<(String, Route)>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, route: Route) -> Self {
        self.action = Some((label.into(), route));
        self
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn apply(mut self, action: ToastAction) -> Self {
        match action {
            ToastAction::Push(toast) => {
                if !self.toasts.iter().any(|t| t.id == toast.id) {
                    self.toasts.push(toast);
                }
            }
            ToastAction::Dismiss(id) => self.toasts.retain(|t| t.id != id),
        }
        self
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let added = Toast::new(ToastKind::Success, "Added", "1 x Cake");
        let oops = Toast::new(ToastKind::Error, "Oops", "Invalid promo code.");
        assert_ne!(added.id, oops.id);

        let queue = ToastQueue::default()
            .apply(ToastAction::Push(added.clone()))
            .apply(ToastAction::Push(oops))
            .apply(ToastAction::Push(added.clone()));
        assert_eq!(queue.toasts.len(), 2);

        let queue = queue.apply(ToastAction::Dismiss(added.id)).apply(ToastAction::Dismiss(u32::MAX));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].title, "Oops");
    }
}
