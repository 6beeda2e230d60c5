//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every page request; `App` is shared
//! by SSR and hydration. The auth provider wraps the router so session state
//! survives navigation, and every page renders inside `RootLayout`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::context::auth::AuthProvider;
use crate::pages::drafts::DraftsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::root::RootLayout;

const FIREBASE_APP_SDK: &str = "https://www.gstatic.com/firebasejs/10.12.2/firebase-app-compat.js";
const FIREBASE_AUTH_SDK: &str = "https://www.gstatic.com/firebasejs/10.12.2/firebase-auth-compat.js";

/// HTML document rendered around the app on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=FIREBASE_APP_SDK></script>
                <script src=FIREBASE_AUTH_SDK></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/draftdesk.css"/>
        <Title text="DraftDesk"/>
        <AuthProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <ParentRoute path=path!("") view=RootLayout>
                        <Route path=path!("") view=HomePage/>
                        <Route path=path!("login") view=LoginPage/>
                        <Route path=path!("register") view=RegisterPage/>
                        <Route path=path!("drafts") view=DraftsPage/>
                        <Route path=path!("*any") view=NotFoundPage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
