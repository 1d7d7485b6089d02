//! Contratos de colaboradores externos del engine.
//!
//! El engine es una librería: no tiene superficie de red/archivo propia.
//! Persistencia de borradores, persistencia de entidades, notificaciones e
//! invalidación de caché son traits que el host implementa; aquí viven las
//! variantes en memoria usadas por tests y por el binario de demostración.

pub mod cache;
pub mod draft;
pub mod notify;
pub mod persistence;

use thiserror::Error;

pub use cache::{CacheInvalidator, NullCacheInvalidator, RecordingCacheInvalidator};
pub use draft::{DraftStore, InMemoryDraftStore};
pub use notify::{CollectingNotifier, Notification, Notifier, NullNotifier, Severity};
pub use persistence::{Entity, EntityPersistence, InMemoryEntityPersistence};

/// Error opaco de un colaborador (draft store o persistencia de entidades).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
