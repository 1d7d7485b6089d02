//! Colaboradores instrumentados para los tests de integración.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use adm_core::model::{DraftKey, DraftSnapshot};
use adm_core::{DraftStore, Entity, EntityPersistence, InMemoryDraftStore, StoreError};

/// Draft store que falla las primeras `fail_first` escrituras y luego
/// delega en un store en memoria. Modela un backend intermitente.
#[derive(Debug, Default)]
pub struct FlakyDraftStore {
    pub fail_first: usize,
    pub attempts: AtomicUsize,
    pub inner: InMemoryDraftStore,
}

impl FlakyDraftStore {
    pub fn failing_first(fail_first: usize) -> Self {
        Self { fail_first,
               attempts: AtomicUsize::new(0),
               inner: InMemoryDraftStore::new() }
    }
}

#[async_trait]
impl DraftStore for FlakyDraftStore {
    async fn save(&self, key: &DraftKey, snapshot: &DraftSnapshot) -> Result<(), StoreError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.fail_first {
            return Err(StoreError::new("draft backend unavailable"));
        }
        self.inner.save(key, snapshot).await
    }

    async fn load(&self, key: &DraftKey) -> Result<Option<DraftSnapshot>, StoreError> {
        self.inner.load(key).await
    }

    async fn clear(&self, key: &DraftKey) -> Result<(), StoreError> {
        self.inner.clear(key).await
    }
}

/// Persistencia que rechaza todo envío.
#[derive(Debug, Default)]
pub struct FailingPersistence {
    pub calls: AtomicUsize,
}

#[async_trait]
impl EntityPersistence for FailingPersistence {
    async fn create(&self, _payload: Value) -> Result<Entity, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::new("persistence rejected the payload"))
    }

    async fn update(&self, _id: Uuid, _payload: Value) -> Result<Entity, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::new("persistence rejected the payload"))
    }
}
