//! # client
//!
//! Leptos + WASM front end for CelebHub's featured-listing payments and
//! admin actions.
//!
//! This crate contains pages, components, UI state, network types, and the
//! browser utilities for theme persistence and anti-forgery tokens. The same
//! crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("hydrating celebhub client");
    leptos::mount::hydrate_body(app::App);
}
