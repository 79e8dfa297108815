use yew::prelude::*;

use super::DialogFrame;
use crate::routes::ViewId;

#[function_component(CommunityThemesDialog)]
pub fn community_themes_dialog() -> Html {
    html! {
        <DialogFrame
            view={ViewId::CommunityThemes}
            description={AttrValue::from("Browse and apply themes shared by the community.")}
        />
    }
}
