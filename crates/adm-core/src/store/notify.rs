//! Colaborador de notificaciones no bloqueantes.
//!
//! Confirmaciones de autosave, mensajes de validación bloqueada y fallos de
//! envío viajan por aquí; el engine nunca decide cómo se renderizan.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::sync::lock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(),
               description: description.into(),
               severity: Severity::Info }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(),
               description: description.into(),
               severity: Severity::Warning }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(),
               description: description.into(),
               severity: Severity::Error }
    }
}

pub trait Notifier: Send + Sync {
    fn emit(&self, notification: Notification);
}

/// Descarta todo; colaborador por defecto del builder.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn emit(&self, _notification: Notification) {}
}

/// Acumula lo emitido, para tests.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    inner: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> Vec<Notification> {
        lock(&self.inner).clone()
    }
}

impl Notifier for CollectingNotifier {
    fn emit(&self, notification: Notification) {
        lock(&self.inner).push(notification);
    }
}
