// ============================================================================
// APP - Raíz de la aplicación: router + switch de vistas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::dom::set_document_title;
use crate::routes::{Route, ViewKind};
use crate::views::dialogs::{
    AddSearchEngineDialog, CommunityThemesDialog, DeleteExtensionDialog,
    DeleteSearchEngineDialog, EditSearchEngineDialog, ImportExtensionDialog,
};
use crate::views::{SearchPage, SettingsPage};

/// Renderiza exactamente la vista asociada a la ruta activa
pub fn switch(route: Route) -> Html {
    match route {
        Route::Search => html! { <SearchPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::EditSearchEngine { index } => html! { <EditSearchEngineDialog {index} /> },
        Route::DeleteSearchEngine => html! { <DeleteSearchEngineDialog /> },
        Route::AddSearchEngine => html! { <AddSearchEngineDialog /> },
        Route::ImportExtension => html! { <ImportExtensionDialog /> },
        Route::DeleteExtension => html! { <DeleteExtensionDialog /> },
        Route::CommunityThemes => html! { <CommunityThemesDialog /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Search} /> },
    }
}

/// Contenedor de la vista activa: título del documento + clase page/dialog
#[function_component(RouteShell)]
fn route_shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let view = route.view();

    use_effect_with(route.clone(), move |route| {
        match route.view() {
            Some(view) => {
                log::debug!("🧭 [ROUTER] Navegación a {:?} ({})", route, route.to_path());
                if let Err(e) = set_document_title(&CONFIG.document_title(view.title())) {
                    log::warn!("⚠️ No se pudo actualizar el título: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [ROUTER] Ruta no declarada, redirigiendo a search"),
        }
        || ()
    });

    let class = match view.map(|v| v.kind()) {
        Some(ViewKind::Dialog) => "view dialog",
        _ => "view page",
    };

    html! {
        <main class={class}>
            <Switch<Route> render={switch} />
        </main>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <RouteShell />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ROUTE_TABLE;
    use yew::ServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};

    #[derive(Properties, PartialEq)]
    struct AtUrlProps {
        url: String,
    }

    // Misma raíz que App, con historial en memoria en lugar del navegador
    #[function_component(AtUrl)]
    fn at_url(props: &AtUrlProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(props.url.clone());

        html! {
            <Router {history}>
                <RouteShell />
            </Router>
        }
    }

    async fn render_at(url: &str) -> String {
        let url = url.to_string();
        ServerRenderer::<AtUrl>::with_props(move || AtUrlProps { url })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn each_declared_path_renders_only_its_view() {
        for entry in ROUTE_TABLE.iter() {
            let html = render_at(&entry.path.replace(":index", "7")).await;
            let marker = format!("data-view=\"{}\"", entry.name);
            assert!(html.contains(&marker), "{} no renderiza {}: {}", entry.path, entry.name, html);
            assert_eq!(html.matches("data-view=").count(), 1, "{}: {}", entry.path, html);
        }
    }

    #[tokio::test]
    async fn edit_view_receives_the_index() {
        let html = render_at("/edit-search-engine/7").await;
        assert!(html.contains("Search engine #7"), "{}", html);
        assert!(html.contains("view dialog"));
    }

    #[tokio::test]
    async fn search_is_detached_after_navigating_to_settings() {
        let html = render_at("/").await;
        assert!(html.contains("search-page"));
        assert!(html.contains("view page"));

        let html = render_at("/settings").await;
        assert!(html.contains("settings-page"));
        assert!(!html.contains("search-page"));
    }

    #[tokio::test]
    async fn undeclared_path_renders_no_view() {
        let html = render_at("/does-not-exist").await;
        assert_eq!(html.matches("data-view=").count(), 0, "{}", html);
    }
}
