#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn storage_key_is_scoped_by_uid() {
    assert_eq!(storage_key("u1"), "draftdesk_composer:u1");
    assert_ne!(storage_key("u1"), storage_key("u2"));
}

#[test]
fn blank_detection_ignores_whitespace() {
    assert!(ComposerDraft::default().is_blank());
    assert!(ComposerDraft { title: "  ".to_owned(), content: "\n".to_owned() }.is_blank());
    assert!(!ComposerDraft { title: "Plan".to_owned(), content: String::new() }.is_blank());
}

#[test]
fn load_is_none_outside_browser() {
    save("u1", &ComposerDraft { title: "Plan".to_owned(), content: "body".to_owned() });
    assert_eq!(load("u1"), None);
    clear("u1");
}
