use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Enlaces de la pantalla de ajustes hacia cada diálogo
fn sections() -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("Search engines", vec![Route::AddSearchEngine, Route::DeleteSearchEngine]),
        ("Extensions", vec![Route::ImportExtension, Route::DeleteExtension]),
        ("Themes", vec![Route::CommunityThemes]),
    ]
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <div class="settings-page" data-view="settings">
            <header class="settings-header">
                <Link<Route> classes={classes!("btn-back")} to={Route::Search}>{"←"}</Link<Route>>
                <h1>{"Settings"}</h1>
            </header>
            { for sections().into_iter().map(|(title, routes)| html! {
                <section class="settings-section">
                    <h2>{ title }</h2>
                    <ul>
                        { for routes.into_iter().map(|route| html! {
                            <li>
                                <Link<Route> to={route.clone()}>
                                    { route.view().map(|v| v.title()).unwrap_or_default() }
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </section>
            }) }
        </div>
    }
}
