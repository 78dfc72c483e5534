// lib.rs - Root module for the catalog_admin library
//
// The web_app module holds the whole application; fixtures carry
// reusable table setup for the database test suites.

pub mod web_app;

/// Reusable test data and database setup
#[cfg(feature = "db-tools")]
pub mod fixtures;

/// WASM entry point for client-side hydration
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
