//! Page-root layout wrapping every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the `Notifier` so routed pages can raise toasts, then renders the
//! navbar, the nested-route outlet, and the toaster (top-right, newest first).

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::toaster::Toaster;
use crate::context::notify::Notifier;
use crate::state::toast::ToastPosition;

#[component]
pub fn RootLayout() -> impl IntoView {
    provide_context(Notifier::new());

    view! {
        <Navbar/>
        <main class="font-poppins transition duration-300">
            <Outlet/>
        </main>
        <Toaster position=ToastPosition::TopRight reverse_order=false/>
    }
}
