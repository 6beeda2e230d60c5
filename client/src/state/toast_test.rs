use super::*;

// =============================================================
// Styles
// =============================================================

#[test]
fn success_style_uses_green_scheme() {
    let style = ToastKind::Success.style();
    assert_eq!(style.border, "1px solid #10B981");
    assert_eq!(style.color, "#10B981");
    assert_eq!(style.icon_primary, "#10B981");
    assert_eq!(style.icon_secondary, "#FFFAEE");
    assert_eq!(style.padding, "16px");
}

#[test]
fn error_style_uses_red_scheme() {
    let style = ToastKind::Error.style();
    assert_eq!(style.border, "1px solid #EF4444");
    assert_eq!(style.color, "#EF4444");
    assert_eq!(style.icon_primary, "#EF4444");
    assert_eq!(style.icon_secondary, "#FFFAEE");
}

#[test]
fn body_css_renders_declarations() {
    assert_eq!(
        SUCCESS_STYLE.body_css(),
        "border: 1px solid #10B981; padding: 16px; color: #10B981;"
    );
    assert_eq!(ERROR_STYLE.icon_css(), "background: #EF4444; color: #FFFAEE;");
}

#[test]
fn errors_linger_longer_than_successes() {
    assert_eq!(ToastKind::Success.duration_ms(), 2_000);
    assert_eq!(ToastKind::Error.duration_ms(), 4_000);
}

// =============================================================
// Toaster options
// =============================================================

#[test]
fn toaster_defaults_to_top_right_without_reversal() {
    let options = ToasterOptions::default();
    assert_eq!(options.position, ToastPosition::TopRight);
    assert!(!options.reverse_order);
    assert_eq!(options.position.css_class(), "toaster toaster--top-right");
}

// =============================================================
// Queue
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    assert!(a < b);
    assert_eq!(state.len(), 2);
}

#[test]
fn ordered_shows_newest_first_by_default() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "first");
    state.push(ToastKind::Success, "second");
    state.push(ToastKind::Error, "third");
    let messages: Vec<_> = state.ordered(false).into_iter().map(|t| t.message).collect();
    assert_eq!(messages, ["third", "second", "first"]);
}

#[test]
fn ordered_reversed_shows_oldest_first() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "first");
    state.push(ToastKind::Success, "second");
    let messages: Vec<_> = state.ordered(true).into_iter().map(|t| t.message).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Error, "b");
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert_eq!(state.ordered(false).into_iter().map(|t| t.id).collect::<Vec<_>>(), [b]);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    state.dismiss(a);
    assert!(state.is_empty());
    let b = state.push(ToastKind::Success, "b");
    assert_ne!(a, b);
}
