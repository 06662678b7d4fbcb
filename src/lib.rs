//! # peekaboo
//!
//! Leptos + WASM demo of two presentational login/signup widgets: a
//! conventional auth form with inline validation (`pages::auth`) and a
//! decorative variant whose cartoon face follows the pointer and covers
//! its eyes while the password field is focused (`pages::face_login`).
//!
//! All validation is cosmetic and client-side. Nothing is submitted
//! anywhere, and no state survives a reload.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and take over the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
