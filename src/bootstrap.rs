// ============================================================================
// ARRANQUE - Crea la raíz, instala el router y monta en el ancla
// ============================================================================
// Un solo montaje por proceso. El guard se reclama solo cuando el ancla
// existe, así un fallo por ancla ausente no bloquea un reintento.
// ============================================================================

use std::cell::Cell;
use yew::AppHandle;

use crate::app::App;
use crate::config::AppConfig;
use crate::dom::get_element_by_id;
use crate::error::BootstrapError;

/// Flag de un solo uso: previene montajes duplicados
#[derive(Debug, Default)]
pub struct MountGuard {
    mounted: Cell<bool>,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self { mounted: Cell::new(false) }
    }

    pub fn claim(&self) -> Result<(), BootstrapError> {
        if self.mounted.replace(true) {
            log::warn!("⚠️ [BOOT] mount ya fue llamado, ignorando llamada duplicada");
            return Err(BootstrapError::AlreadyMounted);
        }
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

thread_local! {
    static MOUNT_GUARD: MountGuard = const { MountGuard::new() };
}

/// ¿Ya se montó la app en este hilo?
pub fn is_mounted() -> bool {
    MOUNT_GUARD.with(|guard| guard.is_mounted())
}

/// Primero el ancla, después el guard: sin ancla el guard queda libre
fn claim_anchor<T>(anchor: Option<T>, mount_id: &str) -> Result<T, BootstrapError> {
    let anchor = anchor.ok_or_else(|| BootstrapError::MissingMountAnchor(mount_id.to_string()))?;
    MOUNT_GUARD.with(|guard| guard.claim())?;
    Ok(anchor)
}

/// Monta la aplicación en `#<mount_id>`
pub fn mount(config: &AppConfig) -> Result<AppHandle<App>, BootstrapError> {
    let root = claim_anchor(get_element_by_id(&config.mount_id), &config.mount_id)?;

    log::info!("📌 [BOOT] Montando app en #{}", config.mount_id);
    Ok(yew::Renderer::<App>::with_root(root).render())
}
