use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mount_id: String,
    pub app_title: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            app_title: "Simple KL".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            mount_id: option_env!("MOUNT_ID")
                .filter(|id| !id.is_empty())
                .unwrap_or("app").to_string(),
            app_title: option_env!("APP_TITLE")
                .unwrap_or("Simple KL").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
        }
    }

    /// Nivel de log efectivo; valores desconocidos caen a `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Título del documento para una vista concreta
    pub fn document_title(&self, view_title: &str) -> String {
        format!("{} · {}", view_title, self.app_title)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
