#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod errors;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let origin = dom::page_origin();
    match cargame_core::ApiConfig::from_build_env(&origin) {
        Ok(config) => {
            log::info!("Backend API at {}", config.base_url());
            let client = api::ApiClient::new(config);
            yew::Renderer::<app::App>::with_props(app::AppProps { client }).render();
        }
        Err(err) => {
            log::error!("Cannot start without a backend address: {err}");
            dom::console_error(&err.to_string());
        }
    }
}
