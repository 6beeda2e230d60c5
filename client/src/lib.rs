//! DraftDesk browser application.
//!
//! ARCHITECTURE
//! ============
//! - `identity`: identity-provider trait and implementations (Firebase SDK,
//!   memory, detached).
//! - `context`: auth and notification context providers.
//! - `state`: plain state structs behind those providers.
//! - `components` / `pages`: Leptos views; `app` wires the route table.
//! - `net`: REST helpers and wire types shared with the server crate.
//!
//! Built with `hydrate` for the browser and `ssr` for the server.

pub mod app;
pub mod components;
pub mod context;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: resolve the identity provider, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // The Leptos executor is installed by `hydrate_body`; bootstrap on the
    // plain wasm-bindgen executor until then.
    wasm_bindgen_futures::spawn_local(async {
        let identity = identity::identity_for(net::api::fetch_identity_config().await);
        leptos::mount::hydrate_body(move || {
            provide_context(identity);
            view! { <app::App/> }
        });
    });
}
