//! Utilidades de sincronización compartidas por el engine y los stores en
//! memoria.

use std::sync::{Mutex, MutexGuard};

/// Lock que se recupera de un mutex envenenado en lugar de propagar el
/// pánico. El estado del wizard sigue siendo consistente: cada sección
/// crítica completa su mutación antes de soltar el guard.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
