//! Crypto Devs Punks ENS greeter
//!
//! Connects the visitor's browser wallet and greets them by ENS name.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;
use lib_connect::config::{app_config, init_config};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(err) = init_config() {
        log::error!("Invalid build configuration, falling back to defaults: {}", err);
    }
    log::info!("ENS greeter starting, required network {}", app_config().required_network);

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element shipped in index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, cannot hide loading screen");
        return;
    };

    document.set_title(utils::constants::PAGE_TITLE);

    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::error!("Failed to hide loading screen: {:?}", e);
        }
    }
}
