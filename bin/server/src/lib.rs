//! Makaya BNB booking site.
//!
//! This crate provides the Leptos web interface for browsing rooms and
//! rental equipment, checking availability, and placing bookings. The `ssr`
//! feature builds the Axum server with database access. The `hydrate`
//! feature builds the WASM client.

#![allow(non_snake_case)]

pub mod app;
pub mod cart_storage;
pub mod components;
pub mod pages;
pub mod types;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod server_helpers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
