//! # client
//!
//! Leptos + WASM view for the sticky-notes board.
//!
//! The `stickyboard` crate owns every rule: note lifecycle, drag and resize
//! clamping, persistence. This crate renders its notes, forwards DOM pointer
//! and keyboard events as engine commands, and plugs `localStorage` in as
//! the blob store. Build with the `csr` feature for the browser; without it
//! the crate compiles natively so the pure helpers can be unit tested.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the board.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
