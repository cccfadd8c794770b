//! Airwatch - Leptos frontend
//!
//! Reactive UI for the air quality monitor: a live readings screen fed
//! by a fixed-interval poll, and a ward registry screen with CRUD.

pub mod api;
pub mod app;
pub mod components;

pub use app::App;

/// Client-side mount entry point for WASM
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
