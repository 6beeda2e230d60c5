//! Toast rendering surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the root layout. Reads the queue owned by the `Notifier`
//! in context and renders each toast with its kind's inline style.

use leptos::prelude::*;

use crate::context::notify::use_notifier;
use crate::state::toast::ToastPosition;

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster(#[prop(optional)] position: ToastPosition, #[prop(optional)] reverse_order: bool) -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class=position.css_class()>
            <For
                each=move || toasts.with(|t| t.ordered(reverse_order))
                key=|toast| toast.id
                children=move |toast| {
                    let style = toast.kind.style();
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            role="status"
                            aria-live=toast.kind.aria_live()
                            style=style.body_css()
                        >
                            <span class="toast__icon" style=style.icon_css()>{toast.kind.icon()}</span>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "\u{00D7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
