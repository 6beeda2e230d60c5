//! Card component for draft list items.

#[cfg(test)]
#[path = "draft_card_test.rs"]
mod draft_card_test;

use leptos::prelude::*;

use crate::net::types::Draft;

const PREVIEW_CHARS: usize = 140;

/// First `max_chars` characters of `content`, whitespace-collapsed, with an
/// ellipsis when truncated.
fn preview(content: &str, max_chars: usize) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('\u{2026}');
    cut
}

fn display_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() { "Untitled draft".to_owned() } else { trimmed.to_owned() }
}

/// A draft summary with edit and delete affordances.
#[component]
pub fn DraftCard(
    draft: Draft,
    #[prop(optional)] on_edit: Option<Callback<String>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let id = draft.id.clone();
    let edit_id = draft.id.clone();
    let edited = draft.updated_at != draft.created_at;

    view! {
        <article class="draft-card">
            <h3 class="draft-card__title">{display_title(&draft.title)}</h3>
            <p class="draft-card__preview">{preview(&draft.content, PREVIEW_CHARS)}</p>
            <footer class="draft-card__meta">
                <Show when=move || edited>
                    <span class="draft-card__edited">"edited"</span>
                </Show>
                <button
                    class="draft-card__edit"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        if let Some(on_edit) = on_edit.as_ref() {
                            on_edit.run(edit_id.clone());
                        }
                    }
                >
                    "Edit"
                </button>
                <button
                    class="draft-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        if let Some(on_delete) = on_delete.as_ref() {
                            on_delete.run(id.clone());
                        }
                    }
                >
                    "Delete"
                </button>
            </footer>
        </article>
    }
}
