use yew::prelude::*;

use super::DialogFrame;
use crate::routes::ViewId;

#[derive(Properties, PartialEq)]
pub struct EditSearchEngineProps {
    /// Segmento `:index` de la URL, tal cual llega del router
    pub index: String,
}

/// Índice del motor de búsqueda; solo dígitos ASCII, sin signo ni espacios
pub fn parse_engine_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[function_component(EditSearchEngineDialog)]
pub fn edit_search_engine_dialog(props: &EditSearchEngineProps) -> Html {
    let body = match parse_engine_index(&props.index) {
        Some(index) => html! {
            <p class="engine-index">{ format!("Search engine #{}", index) }</p>
        },
        None => {
            log::warn!("⚠️ Índice de motor inválido: {:?}", props.index);
            html! {
                <p class="dialog-error">{ format!("Invalid search engine index: {}", props.index) }</p>
            }
        }
    };

    html! {
        <DialogFrame view={ViewId::EditSearchEngine}>
            { body }
        </DialogFrame>
    }
}
