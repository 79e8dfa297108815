// ============================================================================
// ELEMENT HELPERS - Acceso a window/document y al ancla de montaje
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Path actual de la barra de direcciones (sin query ni hash)
pub fn current_path() -> Result<String, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .pathname()
}

/// Establecer el título del documento
pub fn set_document_title(title: &str) -> Result<(), JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .set_title(title);
    Ok(())
}
