//! Colaborador de invalidación de caché.
//!
//! Tras un envío exitoso el coordinador notifica qué claves lógicas (por
//! ejemplo la vista de listado de la entidad) quedaron obsoletas.

use std::sync::Mutex;

use crate::sync::lock;

pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, keys: &[String]);
}

/// No-op; colaborador por defecto del builder.
#[derive(Debug, Default)]
pub struct NullCacheInvalidator;

impl CacheInvalidator for NullCacheInvalidator {
    fn invalidate(&self, _keys: &[String]) {}
}

/// Registra las claves invalidadas, para tests.
#[derive(Debug, Default)]
pub struct RecordingCacheInvalidator {
    inner: Mutex<Vec<String>>,
}

impl RecordingCacheInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidated(&self) -> Vec<String> {
        lock(&self.inner).clone()
    }
}

impl CacheInvalidator for RecordingCacheInvalidator {
    fn invalidate(&self, keys: &[String]) {
        lock(&self.inner).extend(keys.iter().cloned());
    }
}
