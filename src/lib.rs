//! # guidely-client
//!
//! Leptos + WASM frontend for the Guidely tour-booking marketplace.
//! Travelers browse and book guided tours, guides manage their listings and
//! incoming booking requests, and admins moderate the platform.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST API helpers that talk to the Guidely backend service. The
//! backend itself (listings, bookings, users, payments) is a separate
//! deployment; this crate only consumes its HTTP API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
