//! # site
//!
//! Leptos + WASM frontend for the Les Allumettes shop page in
//! Vert-le-Petit.
//!
//! This crate contains the content model, the page sections, and the small
//! scroll/theme/carousel helpers they share. The `ssr` build renders the
//! page inside the `allumettes` server; the `hydrate` build attaches
//! behaviour in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod seo;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when the module is re-initialised.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
