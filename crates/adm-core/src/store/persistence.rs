//! Colaborador de persistencia de entidades (create/update).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::StoreError;
use crate::sync::lock;

/// Entidad canónica devuelta por el colaborador tras un envío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: Uuid,
    pub payload: Value,
    pub updated_at: DateTime<Utc>,
}

/// Persistencia asíncrona y falible. El engine llama `update` cuando la
/// sesión edita una entidad existente y `create` en caso contrario.
#[async_trait]
pub trait EntityPersistence: Send + Sync {
    async fn create(&self, payload: Value) -> Result<Entity, StoreError>;
    async fn update(&self, id: Uuid, payload: Value) -> Result<Entity, StoreError>;
}

#[async_trait]
impl<T: EntityPersistence + ?Sized> EntityPersistence for std::sync::Arc<T> {
    async fn create(&self, payload: Value) -> Result<Entity, StoreError> {
        (**self).create(payload).await
    }

    async fn update(&self, id: Uuid, payload: Value) -> Result<Entity, StoreError> {
        (**self).update(id, payload).await
    }
}

/// Persistencia en memoria para tests y demos.
#[derive(Debug, Default)]
pub struct InMemoryEntityPersistence {
    inner: Mutex<HashMap<Uuid, Entity>>,
}

impl InMemoryEntityPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Uuid) -> Option<Entity> {
        lock(&self.inner).get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).is_empty()
    }
}

#[async_trait]
impl EntityPersistence for InMemoryEntityPersistence {
    async fn create(&self, payload: Value) -> Result<Entity, StoreError> {
        let entity = Entity { id: Uuid::new_v4(),
                              payload,
                              updated_at: Utc::now() };
        lock(&self.inner).insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: Uuid, payload: Value) -> Result<Entity, StoreError> {
        let mut inner = lock(&self.inner);
        if !inner.contains_key(&id) {
            return Err(StoreError::new(format!("entity {id} not found")));
        }
        let entity = Entity { id,
                              payload,
                              updated_at: Utc::now() };
        inner.insert(id, entity.clone());
        Ok(entity)
    }
}
