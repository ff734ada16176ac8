//! # microblog-client
//!
//! Leptos + WASM frontend for the microblog application.
//!
//! This crate contains the static route table ([`routes`]), the root
//! [`app::App`] component that mounts it, the page views, and the shared
//! navigation component. Path matching and view mounting are handled by
//! `leptos_router`; this crate only declares which view renders at which
//! path.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;

/// Browser entry point — attaches the client to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating microblog client");

    leptos::mount::hydrate_body(App);
}
