//! # folio-admin
//!
//! Admin dashboard for a portfolio site. The browser half manages projects
//! and reads contact messages; the server half renders the app and proxies
//! every call to the portfolio REST backend.

pub mod app;
pub mod error_template;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod fileserv;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
