// ============================================================================
// SIMPLE KL UI - FRONTEND WASM (RUST PURO)
// ============================================================================
// - Routes: tabla estática path -> vista
// - App: raíz con BrowserRouter (history API, sin hash)
// - Views: páginas y diálogos
// - Bootstrap: monta la raíz en #app una sola vez
// ============================================================================

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;
pub mod routes;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 {} - Rust Puro + Yew Router ({})", CONFIG.app_title, CONFIG.environment);

    match dom::current_path() {
        Ok(path) => log::debug!("📍 [BOOT] Path inicial: {}", path),
        Err(e) => log::warn!("⚠️ [BOOT] No se pudo leer el path inicial: {:?}", e),
    }

    // El handle no se guarda: la app vive mientras viva la página
    bootstrap::mount(&CONFIG).map_err(|e| {
        log::error!("❌ [BOOT] Error montando la app: {}", e);
        JsValue::from(e)
    })?;

    Ok(())
}
