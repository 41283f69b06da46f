//! # client
//!
//! Leptos + WASM frontend for the lead manager.
//!
//! Users register or sign in, then list, create, update, and delete lead
//! records through the REST backend. The host crate renders this app on the
//! server (`ssr`) and the browser bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating lead manager");
    leptos::mount::hydrate_body(app::App);
}
