//! Registration page: email/password signup followed by a profile update.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::login::{redirect_when_signed_in, report_sign_in};
use crate::context::auth::use_auth;
use crate::context::notify::use_notifier;

/// Validated registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub name: String,
    pub photo_url: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_registration(
    name: &str,
    photo_url: &str,
    email: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let photo_url = photo_url.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !photo_url.is_empty() && !(photo_url.starts_with("https://") || photo_url.starts_with("http://")) {
        return Err("Photo URL must start with http:// or https://.");
    }
    Ok(Registration {
        name: name.to_owned(),
        photo_url: photo_url.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let name = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    redirect_when_signed_in();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match validate_registration(
            &name.get_untracked(),
            &photo_url.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(form) => form,
            Err(message) => {
                notifier.notify_error(message);
                return;
            }
        };
        busy.set(true);
        let pending = auth.create_user(&form.email, &form.password);
        leptos::task::spawn_local(async move {
            let credential = match pending.await {
                Ok(credential) => credential,
                Err(e) => {
                    report_sign_in(Err(e), auth, notifier, busy);
                    return;
                }
            };
            if let Err(e) = auth.update_user_profile(&form.name, &form.photo_url).await {
                notifier.notify_error(e.to_string());
            }
            auth.sync_current_user();
            report_sign_in(Ok(credential), auth, notifier, busy);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="url"
                        placeholder="Photo URL (optional)"
                        prop:value=move || photo_url.get()
                        on:input=move |ev| photo_url.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="login-message">
                    "Already registered? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
