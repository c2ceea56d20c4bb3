pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    let (config, config_error) = match config::SiteConfig::load(&document) {
        Ok(config) => (config, None),
        Err(e) => (config::SiteConfig::default(), Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("Portfolio site starting...");
    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }

    app::run(document, config);

    Ok(())
}
