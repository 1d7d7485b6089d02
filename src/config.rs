//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`) que el binario usa para afinar el engine: ventana de debounce
//! del autosave y filtro de logging.

use once_cell::sync::Lazy;
use std::env;

use adm_core::constants::DEFAULT_AUTOSAVE_DEBOUNCE_MS;

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Parámetros del autosave del wizard.
    pub autosave: AutosaveConfig,
    /// Filtro por defecto de `tracing` cuando `RUST_LOG` no está definido.
    pub log_filter: String,
}

/// Parámetros del autosave.
pub struct AutosaveConfig {
    /// Ventana de debounce en milisegundos.
    pub debounce_ms: u64,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let debounce_ms = env::var("AUTOSAVE_DEBOUNCE_MS").ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_AUTOSAVE_DEBOUNCE_MS);
    let log_filter = env::var("LOG_FILTER").unwrap_or_else(|_| "info".to_string());
    AppConfig {
        autosave: AutosaveConfig { debounce_ms },
        log_filter,
    }
});
