//! # campus-client
//!
//! Leptos + WASM front end for the Smart Campus portal.
//!
//! Students review their profile, attendance, outing requests and
//! announcements; administrators mark attendance, review outing requests and
//! publish announcements. Access to both dashboards goes through the
//! persisted [`state::session::SessionStore`] and the role checks in
//! [`state::guard`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
