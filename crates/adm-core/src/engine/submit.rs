//! SubmissionCoordinator: del data acumulado a la entidad canónica.
//!
//! Invocado desde `next()` en el paso terminal o desde la acción explícita
//! de "guardar y salir". En éxito limpia el borrador y marca la sesión como
//! no-borrador; en fallo deja el estado del wizard y el snapshot intactos
//! para que el usuario reintente sin re-capturar datos.

use crate::engine::WizardEngine;
use crate::errors::WizardError;
use crate::gate;
use crate::store::{DraftStore, Entity, EntityPersistence, Notification};
use crate::sync::lock;

impl<D, P> WizardEngine<D, P>
    where D: DraftStore + 'static,
          P: EntityPersistence + 'static
{
    /// Envía el data acumulado. A lo sumo un envío en vuelo por sesión: un
    /// segundo intento mientras uno está pendiente se rechaza, nunca corre
    /// en paralelo.
    pub async fn submit(&mut self) -> Result<Entity, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }

        let (payload, entity_id) = {
            let state = lock(self.state_cell());
            let visible = self.registry().visible(&state.data);
            if visible.is_empty() {
                return Err(WizardError::NoVisibleSteps);
            }
            // La navegación libre (jump_to) no valida pasos intermedios; el
            // envío exige que todo paso visible pase su gate. Saltar por
            // encima de un paso inválido bloquea aquí, no antes.
            if let Some(step) = visible.iter().find(|s| !gate::step_is_valid(s, &state.data)) {
                return Err(WizardError::ValidationFailed { step_id: step.id().to_string() });
            }
            ((self.projection())(&state.data), state.entity_id)
        };

        let (draft_store, persistence, notifier, cache) = self.parts_for_submit();

        self.submitting = true;
        let result = match entity_id {
            Some(id) => persistence.update(id, payload).await,
            None => persistence.create(payload).await,
        };
        self.submitting = false;

        match result {
            Ok(entity) => {
                // El timer pendiente se aborta antes de limpiar: un commit
                // tardío no puede resucitar el borrador recién borrado.
                self.cancel_autosave();
                if let Err(err) = draft_store.clear(self.draft_key()).await {
                    tracing::warn!(key = %self.draft_key(), error = %err,
                                   "draft clear failed after successful submission");
                }
                {
                    let mut state = lock(self.state_cell());
                    state.is_draft = false;
                    state.entity_id = Some(entity.id);
                }
                notifier.emit(Notification::info("Submission complete",
                                                 "The record has been saved"));
                cache.invalidate(self.invalidation_keys());
                Ok(entity)
            }
            Err(err) => {
                // Estado y borrador quedan exactamente como estaban.
                notifier.emit(Notification::error("Submission failed", err.to_string()));
                Err(WizardError::Submission(err.to_string()))
            }
        }
    }

    /// Acción explícita "guardar y salir": mismo camino que el envío
    /// terminal.
    pub async fn save_and_exit(&mut self) -> Result<Entity, WizardError> {
        self.submit().await
    }
}

#[cfg(test)]
mod tests {
    use crate::step::StepDefinition;
    use crate::store::{InMemoryDraftStore, InMemoryEntityPersistence};
    use crate::{WizardEngine, WizardError};

    #[tokio::test]
    async fn in_flight_guard_rejects_a_second_submission() {
        let persistence = InMemoryEntityPersistence::new();
        let mut engine = WizardEngine::builder(InMemoryDraftStore::new(), persistence)
            .step(StepDefinition::new("only", "Only step"))
            .build()
            .expect("engine");

        engine.submitting = true;
        let err = engine.submit().await.expect_err("must be rejected");
        assert_eq!(err, WizardError::SubmissionInFlight);
    }
}
