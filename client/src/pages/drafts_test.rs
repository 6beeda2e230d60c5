use super::*;
use crate::util::composer_cache::ComposerDraft;

fn draft(id: &str, updated_at: i64) -> Draft {
    Draft {
        id: id.to_owned(),
        uid: "u1".to_owned(),
        title: format!("Draft {id}"),
        content: String::new(),
        created_at: 0,
        updated_at,
    }
}

#[test]
fn validate_composer_requires_title() {
    assert_eq!(validate_composer("   ", "body"), Err("Give the draft a title."));
}

#[test]
fn validate_composer_trims_title_but_keeps_content() {
    assert_eq!(
        validate_composer("  Plan ", "  indented\n"),
        Ok(("Plan".to_owned(), "  indented\n".to_owned()))
    );
}

#[test]
fn upsert_front_prepends_new_draft() {
    let mut list = vec![draft("a", 1)];
    upsert_front(&mut list, draft("b", 2));
    let ids: Vec<_> = list.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn upsert_front_replaces_existing_entry() {
    let mut list = vec![draft("a", 1), draft("b", 1)];
    upsert_front(&mut list, draft("b", 5));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "b");
    assert_eq!(list[0].updated_at, 5);
}

#[test]
fn remove_draft_reports_whether_anything_changed() {
    let mut list = vec![draft("a", 1), draft("b", 1)];
    assert!(remove_draft(&mut list, "a"));
    assert!(!remove_draft(&mut list, "a"));
    assert_eq!(list.len(), 1);
}

#[test]
fn restored_composer_brings_back_cached_new_draft() {
    let cached = ComposerDraft { title: "Half written".to_owned(), content: "so far".to_owned() };
    assert_eq!(restored_composer(Some(cached.clone())), cached);
}

#[test]
fn restored_composer_is_empty_without_cache() {
    assert_eq!(restored_composer(None), ComposerDraft::default());
    let blank = ComposerDraft { title: "  ".to_owned(), content: String::new() };
    assert_eq!(restored_composer(Some(blank)), ComposerDraft::default());
}
