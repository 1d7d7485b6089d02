//! Almacenamiento de borradores, claveado por `DraftKey`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::model::{DraftKey, DraftSnapshot};
use crate::sync::lock;

/// Colaborador de borradores: `save` sobreescribe, `load` devuelve `None`
/// cuando no hay borrador, `clear` es idempotente.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn save(&self, key: &DraftKey, snapshot: &DraftSnapshot) -> Result<(), StoreError>;
    async fn load(&self, key: &DraftKey) -> Result<Option<DraftSnapshot>, StoreError>;
    async fn clear(&self, key: &DraftKey) -> Result<(), StoreError>;
}

// Permite compartir un store entre la sesión y el test/host que lo inspecciona.
#[async_trait]
impl<T: DraftStore + ?Sized> DraftStore for std::sync::Arc<T> {
    async fn save(&self, key: &DraftKey, snapshot: &DraftSnapshot) -> Result<(), StoreError> {
        (**self).save(key, snapshot).await
    }

    async fn load(&self, key: &DraftKey) -> Result<Option<DraftSnapshot>, StoreError> {
        (**self).load(key).await
    }

    async fn clear(&self, key: &DraftKey) -> Result<(), StoreError> {
        (**self).clear(key).await
    }
}

/// Store en memoria para tests y demos. Cuenta los commits para poder
/// afirmar la disciplina de un-solo-timer del autosave.
#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    inner: Mutex<HashMap<String, DraftSnapshot>>,
    saves: AtomicUsize,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, key: &DraftKey) -> Option<DraftSnapshot> {
        lock(&self.inner).get(&key.storage_key()).cloned()
    }

    /// Total de escrituras aceptadas desde la creación del store.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn save(&self, key: &DraftKey, snapshot: &DraftSnapshot) -> Result<(), StoreError> {
        lock(&self.inner).insert(key.storage_key(), snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load(&self, key: &DraftKey) -> Result<Option<DraftSnapshot>, StoreError> {
        Ok(lock(&self.inner).get(&key.storage_key()).cloned())
    }

    async fn clear(&self, key: &DraftKey) -> Result<(), StoreError> {
        lock(&self.inner).remove(&key.storage_key());
        Ok(())
    }
}
