//! Login page supporting email/password and Google popup sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::auth::{AuthContext, use_auth};
use crate::context::notify::{Notifier, use_notifier};
use crate::identity::{IdentityError, UserCredential};
use crate::util::auth::validate_credentials;

pub(crate) const SIGNED_IN_LANDING: &str = "/drafts";

pub(crate) fn welcome_message(credential: &UserCredential) -> String {
    if credential.is_new_user {
        format!("Welcome, {}!", credential.user.label())
    } else {
        format!("Welcome back, {}!", credential.user.label())
    }
}

/// Report a finished sign-in attempt. On failure the loading flag is lowered
/// here since the provider sends no auth-state callback for rejected attempts.
pub(crate) fn report_sign_in(
    result: Result<UserCredential, IdentityError>,
    auth: AuthContext,
    notifier: Notifier,
    busy: RwSignal<bool>,
) {
    busy.set(false);
    match result {
        Ok(credential) => {
            notifier.notify_success(welcome_message(&credential));
        }
        Err(e) => {
            auth.set_loading(false);
            notifier.notify_error(e.to_string());
        }
    }
}

/// Send signed-in users to the drafts page once auth has settled.
pub(crate) fn redirect_when_signed_in() {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = auth.state();
    Effect::new(move || {
        if state.with(|s| !s.loading && s.user.is_some()) {
            navigate(SIGNED_IN_LANDING, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    redirect_when_signed_in();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    notifier.notify_error(message);
                    return;
                }
            };
        busy.set(true);
        let pending = auth.login(&email_value, &password_value);
        leptos::task::spawn_local(async move {
            report_sign_in(pending.await, auth, notifier, busy);
        });
    };

    let on_google = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let pending = auth.google_login();
        leptos::task::spawn_local(async move {
            report_sign_in(pending.await, auth, notifier, busy);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <div class="login-divider"></div>
                <button class="login-button login-button--google" on:click=on_google disabled=move || busy.get()>
                    "Continue with Google"
                </button>
                <p class="login-message">
                    "New here? "
                    <A href="/register">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
