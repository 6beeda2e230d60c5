//! Drafts page: list, compose, and delete the signed-in user's drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Loads the user's drafts once auth settles with a user and
//! reports every create/update/delete outcome through the notifier. Picking a
//! card loads it into the composer for editing. An unsaved new draft is cached
//! in `localStorage` per uid until saved.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::draft_card::DraftCard;
use crate::context::auth::use_auth;
use crate::context::notify::use_notifier;
use crate::net::types::{Draft, DraftInput};
use crate::util::auth::install_unauth_redirect;
use crate::util::composer_cache::{self, ComposerDraft};

pub(crate) fn validate_composer(title: &str, content: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the draft a title.");
    }
    Ok((title.to_owned(), content.to_owned()))
}

/// Composer contents once an edit ends: the unsaved new draft cached before
/// the edit started, or an empty composer.
pub(crate) fn restored_composer(cached: Option<ComposerDraft>) -> ComposerDraft {
    cached.filter(|draft| !draft.is_blank()).unwrap_or_default()
}

/// Insert `draft` at the front, replacing any entry with the same id.
pub(crate) fn upsert_front(drafts: &mut Vec<Draft>, draft: Draft) {
    drafts.retain(|d| d.id != draft.id);
    drafts.insert(0, draft);
}

/// Remove the draft with `id`; `false` when it was not listed.
pub(crate) fn remove_draft(drafts: &mut Vec<Draft>, id: &str) -> bool {
    let before = drafts.len();
    drafts.retain(|d| d.id != id);
    drafts.len() != before
}

#[component]
pub fn DraftsPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    install_unauth_redirect(auth, use_navigate());

    let drafts = RwSignal::new(Vec::<Draft>::new());
    let list_loading = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let uid = Memo::new(move |_| auth.user().map(|u| u.uid));

    Effect::new(move || {
        let Some(uid) = uid.get() else {
            drafts.set(Vec::new());
            return;
        };
        if let Some(cached) = composer_cache::load(&uid) {
            title.set(cached.title);
            content.set(cached.content);
        }
        list_loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_user_drafts(&uid).await {
                Ok(list) => drafts.set(list),
                Err(e) => {
                    notifier.notify_error(e);
                }
            }
            list_loading.set(false);
        });
    });

    let persist_composer = move || {
        if editing.get_untracked().is_some() {
            return;
        }
        if let Some(uid) = uid.get_untracked() {
            composer_cache::save(
                &uid,
                &ComposerDraft { title: title.get_untracked(), content: content.get_untracked() },
            );
        }
    };

    let finish_edit = move || {
        editing.set(None);
        let restored = restored_composer(uid.get_untracked().and_then(|uid| composer_cache::load(&uid)));
        title.set(restored.title);
        content.set(restored.content);
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(uid) = uid.get_untracked() else {
            return;
        };
        let (title_value, content_value) = match validate_composer(&title.get_untracked(), &content.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                notifier.notify_error(message);
                return;
            }
        };
        saving.set(true);
        let input = DraftInput { uid: uid.clone(), title: title_value, content: content_value };
        let target = editing.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match target.as_deref() {
                Some(id) => crate::net::api::update_draft(id, &input).await,
                None => crate::net::api::create_draft(&input).await,
            };
            match result {
                Ok(draft) => {
                    drafts.update(|list| upsert_front(list, draft));
                    if target.is_some() {
                        finish_edit();
                        notifier.notify_success("Draft updated.");
                    } else {
                        title.set(String::new());
                        content.set(String::new());
                        composer_cache::clear(&uid);
                        notifier.notify_success("Draft saved.");
                    }
                }
                Err(e) => {
                    notifier.notify_error(e);
                }
            }
            saving.set(false);
        });
    };

    let on_edit = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_draft(&id).await {
                Ok(draft) => {
                    title.set(draft.title);
                    content.set(draft.content);
                    editing.set(Some(draft.id));
                }
                Err(e) => {
                    notifier.notify_error(e);
                }
            }
        });
    });

    let cancel_edit = move |_: leptos::ev::MouseEvent| finish_edit();

    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_draft(&id).await {
                Ok(()) => {
                    drafts.update(|list| {
                        remove_draft(list, &id);
                    });
                    if editing.get_untracked().as_deref() == Some(id.as_str()) {
                        finish_edit();
                    }
                    notifier.notify_success("Draft deleted.");
                }
                Err(e) => {
                    notifier.notify_error(e);
                }
            }
        });
    });

    view! {
        <Show
            when=move || auth.user().is_some()
            fallback=|| view! { <div class="drafts drafts--pending">"Loading\u{2026}"</div> }
        >
            <section class="drafts">
                <h1 class="drafts__title">"My drafts"</h1>
                <form class="composer" on:submit=on_create>
                    <input
                        class="composer__title"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            title.set(event_target_value(&ev));
                            persist_composer();
                        }
                    />
                    <textarea
                        class="composer__content"
                        placeholder="Start writing\u{2026}"
                        prop:value=move || content.get()
                        on:input=move |ev| {
                            content.set(event_target_value(&ev));
                            persist_composer();
                        }
                    ></textarea>
                    <button class="composer__save button button--primary" type="submit" disabled=move || saving.get()>
                        {move || if editing.with(Option::is_some) { "Update draft" } else { "Save draft" }}
                    </button>
                    <Show when=move || editing.with(Option::is_some)>
                        <button class="button" type="button" on:click=cancel_edit>"Cancel"</button>
                    </Show>
                </form>
                <Show when=move || list_loading.get()>
                    <p class="drafts__status">"Loading drafts\u{2026}"</p>
                </Show>
                <Show when=move || !list_loading.get() && drafts.with(Vec::is_empty)>
                    <p class="drafts__status">"No drafts yet."</p>
                </Show>
                <div class="drafts__list">
                    <For
                        each=move || drafts.get()
                        key=|draft| (draft.id.clone(), draft.updated_at)
                        children=move |draft| view! { <DraftCard draft=draft on_edit=on_edit on_delete=on_delete/> }
                    />
                </div>
            </section>
        </Show>
    }
}
