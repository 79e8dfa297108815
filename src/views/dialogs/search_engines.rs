use yew::prelude::*;

use super::DialogFrame;
use crate::routes::ViewId;

#[function_component(AddSearchEngineDialog)]
pub fn add_search_engine_dialog() -> Html {
    html! {
        <DialogFrame
            view={ViewId::AddSearchEngine}
            description={AttrValue::from("Register a new keyword and query URL.")}
        />
    }
}

#[function_component(DeleteSearchEngineDialog)]
pub fn delete_search_engine_dialog() -> Html {
    html! {
        <DialogFrame
            view={ViewId::DeleteSearchEngine}
            description={AttrValue::from("Remove a search engine from the list.")}
        />
    }
}
