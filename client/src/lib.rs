//! # client
//!
//! Leptos + WASM frontend for the task tracker.
//!
//! This crate contains the pages bound to the registration, login and
//! dashboard forms, the flows they run against the REST backend, the
//! browser-side session state, and the network types shared with the API.

pub mod app;
pub mod components;
pub mod flows;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
