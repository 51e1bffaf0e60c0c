//! # folio
//!
//! Leptos + WASM portfolio site: a scrolling page of profile sections that
//! fade in as they enter the viewport, a typewriter hero banner, and a
//! project case-study route.
//!
//! The time- and viewport-dependent behavior lives in the `motion` crate;
//! this crate supplies the browser implementations of its capabilities
//! (`util::scheduler`, `util::observer`), the embedded content bundles
//! (`content`), and the component tree. Browser-only code is gated on the
//! `csr` feature so everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("folio: logger already installed: {err}").into());
    }
    log::info!("folio: mounting");
    leptos::mount::mount_to_body(app::App);
}
