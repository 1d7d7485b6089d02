//! Proyección persistible del borrador y su clave de direccionamiento.
//!
//! El formato en disco/wire es exactamente `{ "data": <objeto>,
//! "lastSaved": <ISO-8601> }`; ningún otro campo viaja con el borrador.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WizardData;

/// Snapshot de borrador: creado/sobreescrito por el autosave, borrado por el
/// coordinador de envío tras un envío exitoso.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub data: WizardData,
    pub last_saved: DateTime<Utc>,
}

/// Clave de borrador: `(owner, kind, entity|"new")`. Una sesión que edita
/// una entidad existente y otra que crea desde cero nunca comparten clave.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftKey {
    pub owner_id: String,
    pub wizard_kind: String,
    pub entity_id: Option<Uuid>,
}

impl DraftKey {
    pub fn new(owner_id: impl Into<String>, wizard_kind: impl Into<String>, entity_id: Option<Uuid>) -> Self {
        Self { owner_id: owner_id.into(),
               wizard_kind: wizard_kind.into(),
               entity_id }
    }

    /// Representación estable usada por los stores como clave plana.
    pub fn storage_key(&self) -> String {
        let entity = self.entity_id
                         .map(|id| id.to_string())
                         .unwrap_or_else(|| "new".to_string());
        format!("{}:{}:{}", self.owner_id, self.wizard_kind, entity)
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
