//! FacilitiPro web server and UI.
//!
//! This crate provides the Leptos-based page tour and, when built with the
//! `ssr` feature, the axum server and the JSON maintenance API.

#![allow(non_snake_case)]

pub mod app;
pub mod pages;
pub mod types;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
