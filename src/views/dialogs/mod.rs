// ============================================================================
// DIÁLOGOS - Una vista por entrada de diálogo de la tabla de rutas
// ============================================================================

pub mod frame;
pub mod edit_search_engine;
pub mod search_engines;
pub mod extensions;
pub mod community_themes;

pub use frame::DialogFrame;
pub use edit_search_engine::EditSearchEngineDialog;
pub use search_engines::{AddSearchEngineDialog, DeleteSearchEngineDialog};
pub use extensions::{DeleteExtensionDialog, ImportExtensionDialog};
pub use community_themes::CommunityThemesDialog;
