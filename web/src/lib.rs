//! Coalwatch Web – Leptos client for coal stack risk monitoring.

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod telemetry;

/// Entry-point called from the WASM bundle to hydrate the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let settings = app::settings_from_document().unwrap_or_else(|| {
        leptos::logging::warn!("No rendered settings in the page, using defaults");
        app::AppSettings::default()
    });
    leptos::mount::hydrate_body(move || {
        leptos::prelude::provide_context(settings);
        app::App()
    });
}
