//! # leadpage-client
//!
//! Leptos + WASM frontend for the lead-generation landing page.
//!
//! This crate contains the page, presentational components, the lead form
//! state machine, the outbound form-service transport, and small browser
//! utilities (UTM capture, developer self-checks). The `leadpage` server
//! crate renders it with the `ssr` feature; the browser bundle is built with
//! the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
