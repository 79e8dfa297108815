// ============================================================================
// TABLA DE RUTAS
// ============================================================================
// Tabla estática ruta -> vista. Se construye en compilación y no cambia
// durante la vida del proceso (sin registro dinámico de rutas).
// - ROUTE_TABLE: datos planos (path, name, view), testeable sin DOM
// - Route: enum tipado que consume el router del navegador
// ============================================================================

use yew_router::prelude::*;

/// Tipo de vista: página completa o diálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Page,
    Dialog,
}

/// Identificador de la vista que renderiza cada entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Search,
    Settings,
    EditSearchEngine,
    DeleteSearchEngine,
    AddSearchEngine,
    ImportExtension,
    DeleteExtension,
    CommunityThemes,
}

impl ViewId {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewId::Search | ViewId::Settings => ViewKind::Page,
            _ => ViewKind::Dialog,
        }
    }

    /// Nombre simbólico de la entrada que renderiza esta vista
    pub fn name(&self) -> &'static str {
        find_entry_by_view(*self).map(|entry| entry.name).unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Search => "Search",
            ViewId::Settings => "Settings",
            ViewId::EditSearchEngine => "Edit search engine",
            ViewId::DeleteSearchEngine => "Delete search engine",
            ViewId::AddSearchEngine => "Add search engine",
            ViewId::ImportExtension => "Import extension",
            ViewId::DeleteExtension => "Delete extension",
            ViewId::CommunityThemes => "Community themes",
        }
    }
}

/// Entrada de la tabla: patrón de URL, nombre simbólico y vista
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewId,
}

pub static ROUTE_TABLE: [RouteEntry; 8] = [
    RouteEntry { path: "/", name: "search", view: ViewId::Search },
    RouteEntry { path: "/settings", name: "settings", view: ViewId::Settings },
    RouteEntry { path: "/edit-search-engine/:index", name: "edit-search-engine", view: ViewId::EditSearchEngine },
    RouteEntry { path: "/delete-search-engine", name: "delete-search-engine", view: ViewId::DeleteSearchEngine },
    RouteEntry { path: "/add-search-engine", name: "add-search-engine", view: ViewId::AddSearchEngine },
    RouteEntry { path: "/import-extension-dialog", name: "import-extension-dialog", view: ViewId::ImportExtension },
    RouteEntry { path: "/delete-extension-dialog", name: "delete-extension-dialog", view: ViewId::DeleteExtension },
    RouteEntry { path: "/community-themes-dialog", name: "community-themes-dialog", view: ViewId::CommunityThemes },
];

pub fn route_table() -> &'static [RouteEntry] {
    &ROUTE_TABLE
}

fn find_entry_by_view(view: ViewId) -> Option<&'static RouteEntry> {
    ROUTE_TABLE.iter().find(|entry| entry.view == view)
}

/// Rutas que entiende el router.
/// Los literales tienen prioridad sobre el segmento parametrizado.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Search,
    #[at("/settings")]
    Settings,
    #[at("/edit-search-engine/:index")]
    EditSearchEngine { index: String },
    #[at("/delete-search-engine")]
    DeleteSearchEngine,
    #[at("/add-search-engine")]
    AddSearchEngine,
    #[at("/import-extension-dialog")]
    ImportExtension,
    #[at("/delete-extension-dialog")]
    DeleteExtension,
    #[at("/community-themes-dialog")]
    CommunityThemes,
    // No es una entrada de la tabla: marca "ninguna ruta declarada coincide"
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn view(&self) -> Option<ViewId> {
        let view = match self {
            Route::Search => ViewId::Search,
            Route::Settings => ViewId::Settings,
            Route::EditSearchEngine { .. } => ViewId::EditSearchEngine,
            Route::DeleteSearchEngine => ViewId::DeleteSearchEngine,
            Route::AddSearchEngine => ViewId::AddSearchEngine,
            Route::ImportExtension => ViewId::ImportExtension,
            Route::DeleteExtension => ViewId::DeleteExtension,
            Route::CommunityThemes => ViewId::CommunityThemes,
            Route::NotFound => return None,
        };
        Some(view)
    }

    pub fn entry(&self) -> Option<&'static RouteEntry> {
        self.view().and_then(find_entry_by_view)
    }

    pub fn name(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.name)
    }

    pub fn is_declared(&self) -> bool {
        self.view().is_some()
    }
}

/// Resuelve un path contra las entradas declaradas.
/// `None` si ninguna coincide (incluido `/404`, que solo existe para el router).
pub fn match_path(path: &str) -> Option<Route> {
    Route::recognize(path).filter(Route::is_declared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use yew_router::history::{History, MemoryHistory};

    fn find_entry_by_name(name: &str) -> Option<&'static RouteEntry> {
        route_table().iter().find(|entry| entry.name == name)
    }

    fn find_entry_by_path(pattern: &str) -> Option<&'static RouteEntry> {
        route_table().iter().find(|entry| entry.path == pattern)
    }

    fn concrete_path(entry: &RouteEntry) -> String {
        entry.path.replace(":index", "7")
    }

    #[test]
    fn names_and_paths_are_unique() {
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|e| e.name).collect();
        let paths: HashSet<_> = ROUTE_TABLE.iter().map(|e| e.path).collect();
        let views: HashSet<_> = ROUTE_TABLE.iter().map(|e| e.view).collect();
        assert_eq!(names.len(), ROUTE_TABLE.len());
        assert_eq!(paths.len(), ROUTE_TABLE.len());
        assert_eq!(views.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn router_paths_match_the_table() {
        let router_paths = Route::routes();
        for entry in route_table() {
            assert!(router_paths.contains(&entry.path), "falta {}", entry.path);
        }
        // La única ruta extra del router es la de not-found
        assert_eq!(router_paths.len(), ROUTE_TABLE.len() + 1);
    }

    #[test]
    fn every_declared_path_renders_its_own_view() {
        for entry in route_table() {
            let route = match_path(&concrete_path(entry))
                .unwrap_or_else(|| panic!("{} no coincide", entry.path));
            assert_eq!(route.view(), Some(entry.view));
            assert_eq!(route.name(), Some(entry.name));
            assert_eq!(route.entry(), Some(entry));
        }
    }

    #[test]
    fn edit_route_carries_index() {
        assert_eq!(
            match_path("/edit-search-engine/7"),
            Some(Route::EditSearchEngine { index: "7".to_string() })
        );
        let route = Route::EditSearchEngine { index: "7".to_string() };
        assert_eq!(route.to_path(), "/edit-search-engine/7");
    }

    #[test]
    fn edit_route_requires_an_index_segment() {
        assert_eq!(match_path("/edit-search-engine"), None);
        assert_eq!(match_path("/edit-search-engine/7/extra"), None);
    }

    #[test]
    fn undeclared_paths_match_nothing() {
        assert_eq!(match_path("/does-not-exist"), None);
        assert_eq!(match_path("/404"), None);
        assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));
        assert!(!Route::NotFound.is_declared());
        assert_eq!(Route::NotFound.name(), None);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(match_path("/settings/"), Some(Route::Settings));
    }

    #[test]
    fn lookup_by_name_and_pattern() {
        let entry = find_entry_by_name("edit-search-engine").unwrap();
        assert_eq!(entry.path, "/edit-search-engine/:index");
        assert_eq!(find_entry_by_path("/settings").map(|e| e.name), Some("settings"));
        assert!(find_entry_by_name("not-found").is_none());
    }

    #[test]
    fn view_names_come_from_the_table() {
        for entry in route_table() {
            assert_eq!(entry.view.name(), entry.name);
        }
    }

    #[test]
    fn pages_and_dialogs() {
        assert_eq!(ViewId::Search.kind(), ViewKind::Page);
        assert_eq!(ViewId::Settings.kind(), ViewKind::Page);
        let dialogs = ROUTE_TABLE
            .iter()
            .filter(|e| e.view.kind() == ViewKind::Dialog)
            .count();
        assert_eq!(dialogs, 6);
    }

    #[test]
    fn navigating_from_search_to_settings() {
        let history = MemoryHistory::new();
        history.push("/");
        assert_eq!(Route::recognize(history.location().path()), Some(Route::Search));

        history.push(Route::Settings.to_path());
        let active = Route::recognize(history.location().path());
        assert_eq!(active, Some(Route::Settings));
        assert_ne!(active, Some(Route::Search));
    }
}
