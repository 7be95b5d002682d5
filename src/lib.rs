//! # orgadmin-client
//!
//! Leptos + WASM front-end fragment for the organization admin portal.
//! Replaces the React advertisement-management widget with a Rust-native
//! UI layer: the advertisement entry card with its action menu, the
//! register/edit form, and the sidebar icon lookup.
//!
//! This crate contains pages, components, application state, wire DTOs,
//! and the GraphQL mutation helpers. Rendering stays thin; lifecycle
//! logic lives in plain state modules so it can be unit tested without
//! a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
