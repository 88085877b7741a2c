//! SEO Portfolio Site
//!
//! A single-page Leptos portfolio, rendered server-side over axum and
//! hydrated in the browser.

pub mod app;
pub mod components;
pub mod dom;
pub mod sections;

#[cfg(feature = "ssr")]
pub mod fileserv;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
