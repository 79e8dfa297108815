use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, ViewId};

#[derive(Properties, PartialEq)]
pub struct DialogFrameProps {
    pub view: ViewId,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Marco común: título, cuerpo y botón para volver a ajustes
#[function_component(DialogFrame)]
pub fn dialog_frame(props: &DialogFrameProps) -> Html {
    let navigator = use_navigator();

    let on_close = Callback::from(move |_e: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Settings);
        }
    });

    html! {
        <div class="dialog" data-view={props.view.name()}>
            <div class="dialog-header">
                <h2>{ props.view.title() }</h2>
            </div>
            if let Some(description) = &props.description {
                <p class="dialog-description">{ description.to_string() }</p>
            }
            <div class="dialog-body">
                { props.children.clone() }
            </div>
            <div class="dialog-actions">
                <button class="btn-secondary" onclick={on_close}>{"Cancel"}</button>
            </div>
        </div>
    }
}
