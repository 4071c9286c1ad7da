//! Widget app web front end
//!
//! Leptos-based WASM front end. Routing is driven by the route table in
//! `route-core`; lazily bound views fetch their chunk before mounting.

mod api;
mod app;
mod components;
mod pages;

pub use api::HttpChunkLoader;
pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
