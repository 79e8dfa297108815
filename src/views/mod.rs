pub mod search;
pub mod settings;
pub mod dialogs;

pub use search::SearchPage;
pub use settings::SettingsPage;
