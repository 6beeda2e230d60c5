#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::toast::{ERROR_STYLE, SUCCESS_STYLE};

#[test]
fn notify_success_queues_success_toast() {
    let notifier = Notifier::new();
    let id = notifier.notify_success("Draft saved").unwrap();
    let toasts = notifier.toasts().get_untracked().ordered(false);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].id, id);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Draft saved");
    assert_eq!(toasts[0].kind.style(), SUCCESS_STYLE);
}

#[test]
fn notify_error_queues_error_toast() {
    let notifier = Notifier::new();
    notifier.notify_error("Login failed");
    let toasts = notifier.toasts().get_untracked().ordered(false);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].kind.style(), ERROR_STYLE);
}

#[test]
fn latest_toast_is_displayed_first() {
    let notifier = Notifier::new();
    notifier.notify_success("one");
    notifier.notify_error("two");
    let messages: Vec<_> = notifier
        .toasts()
        .get_untracked()
        .ordered(false)
        .into_iter()
        .map(|t| t.message)
        .collect();
    assert_eq!(messages, ["two", "one"]);
}

#[test]
fn dismiss_removes_toast() {
    let notifier = Notifier::new();
    let id = notifier.notify_success("bye").unwrap();
    notifier.dismiss(id);
    assert!(notifier.toasts().get_untracked().is_empty());
}
