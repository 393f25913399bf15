//! # landing
//!
//! Leptos + WASM landing page for the GPT-ПРАКТИК course.
//!
//! The page is rendered on the server (`ssr` feature) and hydrated in the
//! browser (`hydrate` feature). Browser primitives (viewport intersection,
//! pointer movement, smooth scrolling) sit behind small adapter traits in
//! [`util`] so the reveal, parallax, accordion and navigation logic can be
//! tested without a rendering surface.

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
    log::info!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
