//! Registro mutable de la sesión del wizard (`WizardState`).
//!
//! Invariantes:
//! - `0 <= current < len(visible)` tras cada operación; el engine reclampa
//!   cada vez que una mutación pudo cambiar el conjunto visible.
//! - `completed` sólo gana ids mediante un `next()` que pasó su gate; nunca
//!   revierte salvo por `reset()` explícito.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::WizardData;

#[derive(Debug, Clone)]
pub struct WizardState {
    /// Índice del paso actual dentro del conjunto visible.
    pub current: usize,
    /// Pasos completados, por id. Claveado por id (no por índice) para que
    /// un cambio del conjunto visible no pueda desplazar flags.
    pub completed: BTreeSet<String>,
    /// Objeto acumulado que alimentan los steps.
    pub data: WizardData,
    /// `true` desde la primera mutación hasta el envío exitoso.
    pub is_draft: bool,
    /// Timestamp del último commit de borrador exitoso.
    pub last_saved: Option<DateTime<Utc>>,
    /// `Some` cuando se edita una entidad existente; clave del borrador y
    /// del envío final.
    pub entity_id: Option<Uuid>,
}

impl WizardState {
    pub fn new(seed: WizardData, entity_id: Option<Uuid>) -> Self {
        Self { current: 0,
               completed: BTreeSet::new(),
               data: seed,
               is_draft: false,
               last_saved: None,
               entity_id }
    }

    pub fn mark_completed(&mut self, step_id: &str) {
        self.completed.insert(step_id.to_string());
    }

    pub fn is_completed(&self, step_id: &str) -> bool {
        self.completed.contains(step_id)
    }

    /// Reclampa el cursor dentro de `[0, visible_len - 1]`. Con un conjunto
    /// visible vacío el cursor cae a 0 y las operaciones de navegación
    /// reportan `NoVisibleSteps`.
    pub(crate) fn clamp_cursor(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.current = 0;
        } else if self.current >= visible_len {
            self.current = visible_len - 1;
        }
    }

    /// Reset explícito: única vía por la que `completed` revierte.
    pub fn reset(&mut self, seed: WizardData) {
        self.current = 0;
        self.completed.clear();
        self.data = seed;
        self.is_draft = false;
        self.last_saved = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_cursor_inside_visible_range() {
        let mut state = WizardState::new(WizardData::new(), None);
        state.current = 5;
        state.clamp_cursor(3);
        assert_eq!(state.current, 2);

        state.clamp_cursor(0);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn reset_clears_completion_and_draft_metadata() {
        let mut state = WizardState::new(WizardData::new(), None);
        state.mark_completed("basic");
        state.is_draft = true;
        state.last_saved = Some(Utc::now());

        state.reset(WizardData::new());

        assert!(state.completed.is_empty());
        assert!(!state.is_draft);
        assert!(state.last_saved.is_none());
        assert_eq!(state.current, 0);
    }
}
