/// Clickbait Hunter - Chrome Extension for headline analysis
/// Built with Rust + WASM + Yew

mod api;
pub mod config;
mod headline;
mod prediction;
mod state;
mod verdict;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::ApiConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the popup against the default local backend
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the popup with options from the host page, e.g.
// `start_popup_with_config({ baseUrl: "http://127.0.0.1:9000" })`
#[wasm_bindgen]
pub fn start_popup_with_config(options: JsValue) -> Result<(), JsValue> {
    let config = ApiConfig::from_js(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Starting popup against {}", config.base_url);

    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { config }).render();
    Ok(())
}
