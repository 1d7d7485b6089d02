//! Constantes del motor de wizard.
//!
//! Valores por defecto que el host puede sobreescribir vía builder o
//! configuración de entorno.

/// Ventana de debounce por defecto del autosave, en milisegundos. Una ráfaga
/// de ediciones dentro de la misma ventana produce exactamente un commit con
/// el estado final fusionado.
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 2_000;

/// `wizard_kind` por defecto cuando el host no declara uno. Participa en la
/// clave de direccionamiento de borradores.
pub const DEFAULT_WIZARD_KIND: &str = "wizard";
