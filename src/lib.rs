//! # learnhub-client
//!
//! Leptos + WASM front end for the LearnHub learning platform.
//!
//! The crate is a pure rendering layer over the platform's REST API: the
//! auth session lives in a context-provided signal, route guards gate pages
//! on it, and all HTTP goes through the `net` gateway which attaches the
//! stored bearer token. Only the token persists across page reloads; the
//! session itself is rebuilt on every startup by `state::auth`.

pub mod app;
pub mod auth;
pub mod components;
pub mod guards;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: attach the client to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
