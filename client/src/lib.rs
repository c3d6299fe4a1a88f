//! # client
//!
//! Leptos + WASM frontend for Streamify's login and signup pages.
//!
//! This crate contains the pages, the shared auth-card components, the auth
//! state and mutation hooks, and the REST client for the auth backend. The
//! root `streamify` binary renders it with SSR; the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {}", components::auth_layout::APP_NAME);
    leptos::mount::hydrate_body(app::App);
}
