//! Top navigation bar with session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the root layout above every routed page. Shows sign-in links
//! while signed out and the user's avatar plus a logout button while signed
//! in; nothing session-specific is shown until auth has settled.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::auth::use_auth;
use crate::context::notify::use_notifier;
use crate::identity::AuthUser;

/// Single uppercase letter shown when the user has no photo.
fn avatar_initial(user: &AuthUser) -> String {
    user.label()
        .chars()
        .find(|c| c.is_alphanumeric())
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let pending = auth.logout();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match pending.await {
                Ok(()) => {
                    notifier.notify_success("Logged out.");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    auth.set_loading(false);
                    notifier.notify_error(e.to_string());
                }
            }
        });
    };

    let session = move || {
        let state = auth.state().get();
        if state.loading && state.user.is_none() {
            return view! { <span class="navbar__pending">"\u{2026}"</span> }.into_any();
        }
        match state.user {
            Some(user) => {
                let label = user.label();
                let avatar = match user.photo_url.clone() {
                    Some(url) => view! { <img class="navbar__avatar" src=url alt=label.clone()/> }.into_any(),
                    None => view! { <span class="navbar__avatar navbar__avatar--initial">{avatar_initial(&user)}</span> }
                        .into_any(),
                };
                view! {
                    <div class="navbar__session">
                        {avatar}
                        <span class="navbar__user" title=user.email.clone().unwrap_or_default()>{label}</span>
                        <button class="navbar__logout" on:click=on_logout.clone()>"Logout"</button>
                    </div>
                }
                .into_any()
            }
            None => view! {
                <div class="navbar__session">
                    <A href="/login" attr:class="navbar__link">"Login"</A>
                    <A href="/register" attr:class="navbar__link navbar__link--primary">"Register"</A>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"DraftDesk"</A>
            <div class="navbar__links">
                <A href="/" attr:class="navbar__link">"Home"</A>
                <A href="/drafts" attr:class="navbar__link">"Drafts"</A>
            </div>
            {session}
        </nav>
    }
}
