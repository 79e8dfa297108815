// ============================================================================
// ERRORES DE ARRANQUE
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("No #{0} element found")]
    MissingMountAnchor(String),

    #[error("App already mounted")]
    AlreadyMounted,
}

// Frontera WASM: el error llega a JS como excepción
impl From<BootstrapError> for JsValue {
    fn from(err: BootstrapError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
