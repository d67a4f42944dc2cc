//! # client
//!
//! Leptos + WASM frontend for the portfolio page: a single server-rendered,
//! hydrated page with a bio, contact links, projects, writing and a persisted
//! light/dark theme.
//!
//! The page owns one piece of state (the theme). Everything else is static
//! content compiled into the binary.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
