//! Browser wallet onboarding demo
//!
//! Connect an injected Sui wallet, fund it from the devnet faucet, and mint
//! a sample NFT. All signing and chain execution happens in the wallet
//! extension and external services; this app is the page-level controller.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages in the browser console instead of an opaque trap
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mint demo starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element from index.html once the WASM module runs.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            element.class_list().add_1("hidden").ok();
        }
        loading.set_attribute("style", "display: none;").ok();
    }
}
