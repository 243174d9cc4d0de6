//! # imgjob-client
//!
//! Leptos + WASM frontend for the image-job service: a job submission page,
//! login and registration, and the session layer that remembers the user's
//! token across reloads.
//!
//! The pieces with state live outside the components: `state::session`
//! (token + logged-in flag with write-through to `localStorage`) and
//! `routes` (the static path ↔ view table). `app::App` wires both together.
//!
//! Feature `hydrate` builds the browser bundle; feature `ssr` builds the
//! `server` module and the host binary that renders `App` with Axum.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
