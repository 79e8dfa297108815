use yew::prelude::*;

use super::DialogFrame;
use crate::routes::ViewId;

#[function_component(ImportExtensionDialog)]
pub fn import_extension_dialog() -> Html {
    html! {
        <DialogFrame
            view={ViewId::ImportExtension}
            description={AttrValue::from("Import an extension from a local folder.")}
        />
    }
}

#[function_component(DeleteExtensionDialog)]
pub fn delete_extension_dialog() -> Html {
    html! {
        <DialogFrame
            view={ViewId::DeleteExtension}
            description={AttrValue::from("Delete an installed extension.")}
        />
    }
}
