//! # causeway-site
//!
//! Leptos + WASM client for The Causeway Estate marketing site. Replaces
//! the hand-written `script.js`/`include.js` pair with a Rust-native UI
//! layer: shared header/footer fragment injection, active-link marking,
//! the mobile hamburger menu, smooth in-page scrolling, the contact form,
//! and a page-load diagnostic.
//!
//! All browser-only code is gated behind the `hydrate` feature so the pure
//! state machines and validators remain testable natively. The `ssr`
//! feature exists for the hosting server, which renders [`app::shell`]
//! through `leptos_axum` and serves this crate's WASM output; the host is
//! deployed separately and is not part of this repository.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
