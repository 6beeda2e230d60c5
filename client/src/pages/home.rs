//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || auth.user().map(|u| format!("Welcome back, {}.", u.label()));

    view! {
        <section class="home">
            <h1 class="home__title">"DraftDesk"</h1>
            <p class="home__subtitle">"Write, keep, and revisit your drafts."</p>
            <Show
                when=move || auth.user().is_some()
                fallback=|| view! {
                    <div class="home__actions">
                        <A href="/login" attr:class="button">"Login"</A>
                        <A href="/register" attr:class="button button--primary">"Create an account"</A>
                    </div>
                }
            >
                <p class="home__greeting">{greeting}</p>
                <A href="/drafts" attr:class="button button--primary">"Open my drafts"</A>
            </Show>
        </section>
    }
}
