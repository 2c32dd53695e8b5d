//! Client-side glue for the deals page.
//!
//! This crate is compiled to WebAssembly and attaches to the server-rendered
//! deals listing. Each behavior reacts to its own DOM trigger; none of them
//! depend on one another.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`starfield`] | Background particle physics, browser-free |
//! | [`theme`] | Light/dark flag and its `localStorage` persistence |
//! | [`favorites`] | Favorites set and its cookie codec |
//! | [`forms`] | Filter reset and the loading indicator |
//! | [`reload`] | Periodic cache-busting page reload |
//! | [`config`] | Tunables with defaults, overridable from the page |
//! | [`consts`] | Default values and DOM hook names |
//! | [`error`] | [`error::PageError`] |
//! | `animation` | `requestAnimationFrame` loop (hydrate only) |
//! | `render` | Canvas drawing (hydrate only) |
//! | `dom` | DOM lookup and listener helpers (hydrate only) |
//! | [`page`] | Boot sequence, deferred until the DOM is parsed |
//!
//! Build with `--features hydrate` for the browser. Without it only the pure
//! logic is compiled, which is what the test suite exercises.

pub mod config;
pub mod consts;
pub mod error;
pub mod favorites;
pub mod forms;
pub mod page;
pub mod reload;
pub mod starfield;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod animation;
#[cfg(feature = "hydrate")]
mod dom;
#[cfg(feature = "hydrate")]
pub mod render;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    let config = config::PageConfig::load();
    log::info!("storefront page glue starting");
    page::boot_when_ready(config);
}
