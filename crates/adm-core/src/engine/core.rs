//! Núcleo del `WizardEngine`: estado de sesión y NavigationController.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value;

use crate::autosave::AutosaveTimer;
use crate::engine::builder::WizardBuilder;
use crate::engine::Projection;
use crate::errors::WizardError;
use crate::gate;
use crate::model::{DraftKey, DraftSnapshot, WizardData, WizardState};
use crate::progress;
use crate::registry::StepRegistry;
use crate::step::StepDefinition;
use crate::store::{CacheInvalidator, DraftStore, EntityPersistence, Notification, Notifier};
use crate::sync::lock;

/// Resultado de un `next()` que pasó su gate.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// El cursor avanzó al índice indicado.
    Advanced { index: usize },
    /// El paso era terminal: se envió en lugar de avanzar.
    Submitted(crate::store::Entity),
}

/// Motor de una sesión de wizard.
///
/// Modelo de ejecución cooperativo: las operaciones del engine no corren en
/// paralelo dentro de una sesión; los únicos puntos de suspensión son el
/// commit de autosave (debounced) y la llamada de envío terminal.
pub struct WizardEngine<D, P>
    where D: DraftStore + 'static,
          P: EntityPersistence + 'static
{
    registry: StepRegistry,
    state: Arc<Mutex<WizardState>>,
    seed: WizardData,
    draft_store: Arc<D>,
    persistence: Arc<P>,
    notifier: Arc<dyn Notifier>,
    cache: Arc<dyn CacheInvalidator>,
    invalidation_keys: Vec<String>,
    projection: Projection,
    key: DraftKey,
    autosave: AutosaveTimer,
    pub(crate) submitting: bool,
}

enum GateDecision {
    Blocked { step_id: String, title: String },
    Pass { step_id: String, terminal: bool },
}

impl<D, P> WizardEngine<D, P>
    where D: DraftStore + 'static,
          P: EntityPersistence + 'static
{
    /// Crea un builder con los dos colaboradores obligatorios.
    pub fn builder(draft_store: D, persistence: P) -> WizardBuilder<D, P> {
        WizardBuilder::new(draft_store, persistence)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(registry: StepRegistry,
                             state: WizardState,
                             seed: WizardData,
                             draft_store: Arc<D>,
                             persistence: Arc<P>,
                             notifier: Arc<dyn Notifier>,
                             cache: Arc<dyn CacheInvalidator>,
                             invalidation_keys: Vec<String>,
                             projection: Projection,
                             key: DraftKey,
                             autosave: AutosaveTimer)
                             -> Self {
        Self { registry,
               state: Arc::new(Mutex::new(state)),
               seed,
               draft_store,
               persistence,
               notifier,
               cache,
               invalidation_keys,
               projection,
               key,
               autosave,
               submitting: false }
    }

    // --- lecturas derivadas -------------------------------------------------

    pub fn data(&self) -> WizardData {
        lock(&self.state).data.clone()
    }

    pub fn current_index(&self) -> usize {
        lock(&self.state).current
    }

    pub fn is_draft(&self) -> bool {
        lock(&self.state).is_draft
    }

    pub fn last_saved(&self) -> Option<chrono::DateTime<Utc>> {
        lock(&self.state).last_saved
    }

    pub fn entity_id(&self) -> Option<uuid::Uuid> {
        lock(&self.state).entity_id
    }

    pub fn draft_key(&self) -> &DraftKey {
        &self.key
    }

    pub fn draft_store(&self) -> &D {
        &self.draft_store
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Definición del paso actual dentro del conjunto visible.
    pub fn current_step(&self) -> Option<StepDefinition> {
        let state = lock(&self.state);
        let visible = self.registry.visible(&state.data);
        if visible.is_empty() {
            return None;
        }
        visible.get(state.current.min(visible.len() - 1))
               .map(|step| (*step).clone())
    }

    pub fn visible_step_ids(&self) -> Vec<String> {
        let state = lock(&self.state);
        self.registry
            .visible(&state.data)
            .iter()
            .map(|step| step.id().to_string())
            .collect()
    }

    /// Proyección `bool[visible]` de los flags de completitud.
    pub fn completed_flags(&self) -> Vec<bool> {
        let state = lock(&self.state);
        self.registry
            .visible(&state.data)
            .iter()
            .map(|step| state.is_completed(step.id()))
            .collect()
    }

    /// Porcentaje derivado en cada petición de render; nunca almacenado.
    pub fn progress(&self) -> u8 {
        let state = lock(&self.state);
        let visible_len = self.registry.visible(&state.data).len();
        progress::progress(state.current, visible_len)
    }

    // --- mutaciones ---------------------------------------------------------

    /// Callback de mutación de los steps: merge superficial + marca de
    /// borrador + re-armado del debounce. Nunca bloquea al caller; el fallo
    /// de escritura se reintenta en el próximo ciclo.
    pub fn on_data_change(&mut self, partial: Value) {
        {
            let mut state = lock(&self.state);
            state.data.merge(partial);
            state.is_draft = true;
            let visible_len = self.registry.visible(&state.data).len();
            state.clamp_cursor(visible_len);
        }
        self.arm_autosave();
    }

    fn arm_autosave(&mut self) {
        let state = Arc::clone(&self.state);
        let store = Arc::clone(&self.draft_store);
        let notifier = Arc::clone(&self.notifier);
        let key = self.key.clone();

        self.autosave.arm(async move {
            let snapshot = {
                let state = lock(&state);
                DraftSnapshot { data: state.data.clone(),
                                last_saved: Utc::now() }
            };
            match store.save(&key, &snapshot).await {
                Ok(()) => {
                    lock(&state).last_saved = Some(snapshot.last_saved);
                    notifier.emit(Notification::info("Draft saved",
                                                     "Your progress has been saved automatically"));
                }
                Err(err) => {
                    // Sólo log: el próximo ciclo de debounce reintenta con
                    // los datos más recientes.
                    tracing::warn!(key = %key, error = %err, "autosave commit failed");
                }
            }
        });
    }

    /// Avance con gate. Si el paso actual no valida, no hay ningún cambio de
    /// estado. En el paso terminal delega en el coordinador de envío en vez
    /// de incrementar el cursor.
    pub async fn next(&mut self) -> Result<NextOutcome, WizardError> {
        let decision = {
            let state = lock(&self.state);
            let visible = self.registry.visible(&state.data);
            if visible.is_empty() {
                return Err(WizardError::NoVisibleSteps);
            }
            let current = state.current.min(visible.len() - 1);
            let step = visible[current];
            if gate::step_is_valid(step, &state.data) {
                GateDecision::Pass { step_id: step.id().to_string(),
                                     terminal: current + 1 == visible.len() }
            } else {
                GateDecision::Blocked { step_id: step.id().to_string(),
                                        title: step.title().to_string() }
            }
        };

        match decision {
            GateDecision::Blocked { step_id, title } => {
                self.notifier.emit(Notification::warning(
                    "Step incomplete",
                    format!("Complete '{title}' before continuing"),
                ));
                Err(WizardError::ValidationFailed { step_id })
            }
            GateDecision::Pass { step_id, terminal } => {
                lock(&self.state).mark_completed(&step_id);
                if terminal {
                    let entity = self.submit().await?;
                    Ok(NextOutcome::Submitted(entity))
                } else {
                    let mut state = lock(&self.state);
                    state.current += 1;
                    let visible_len = self.registry.visible(&state.data).len();
                    state.clamp_cursor(visible_len);
                    Ok(NextOutcome::Advanced { index: state.current })
                }
            }
        }
    }

    /// Retroceso sin validación: no se pierde ningún dato al volver.
    pub fn previous(&mut self) -> usize {
        let mut state = lock(&self.state);
        state.current = state.current.saturating_sub(1);
        state.current
    }

    /// Salto directo del indicador de pasos: no valida los pasos intermedios
    /// (afordancia de navegación libre para editores). El envío sí re-valida
    /// todos los pasos visibles; ver el coordinador.
    pub fn jump_to(&mut self, index: usize) -> usize {
        let mut state = lock(&self.state);
        let visible_len = self.registry.visible(&state.data).len();
        state.current = index;
        state.clamp_cursor(visible_len);
        state.current
    }

    // --- ciclo de vida ------------------------------------------------------

    /// Re-siembra la sesión desde el borrador persistido, si existe.
    /// Devuelve `true` cuando había borrador. Los flags de completitud no se
    /// persisten: la navegación los recalcula.
    pub async fn restore_draft(&mut self) -> Result<bool, WizardError> {
        let snapshot = self.draft_store
                           .load(&self.key)
                           .await
                           .map_err(|e| WizardError::Internal(e.to_string()))?;
        match snapshot {
            Some(snapshot) => {
                let mut state = lock(&self.state);
                state.data = snapshot.data;
                state.last_saved = Some(snapshot.last_saved);
                state.is_draft = true;
                let visible_len = self.registry.visible(&state.data).len();
                state.clamp_cursor(visible_len);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reset explícito del wizard: vuelve a la semilla inicial y limpia la
    /// completitud. Única vía por la que `completed` revierte.
    pub fn reset(&mut self) {
        self.autosave.cancel();
        lock(&self.state).reset(self.seed.clone());
    }

    /// Teardown de sesión (cancelación del usuario o apertura de una sesión
    /// para otra entidad): aborta el timer pendiente para que un snapshot
    /// obsoleto no aterrice en la clave de la sesión siguiente.
    pub fn cancel_session(&mut self) {
        self.autosave.cancel();
    }

    pub fn autosave_armed(&self) -> bool {
        self.autosave.is_armed()
    }

    // --- acceso interno compartido con el coordinador de envío --------------

    pub(crate) fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub(crate) fn state_cell(&self) -> &Arc<Mutex<WizardState>> {
        &self.state
    }

    pub(crate) fn parts_for_submit(&self) -> (Arc<D>, Arc<P>, Arc<dyn Notifier>, Arc<dyn CacheInvalidator>) {
        (Arc::clone(&self.draft_store),
         Arc::clone(&self.persistence),
         Arc::clone(&self.notifier),
         Arc::clone(&self.cache))
    }

    pub(crate) fn projection(&self) -> &Projection {
        &self.projection
    }

    pub(crate) fn invalidation_keys(&self) -> &[String] {
        &self.invalidation_keys
    }

    pub(crate) fn cancel_autosave(&mut self) {
        self.autosave.cancel();
    }
}
