//! Builder del `WizardEngine`.
//!
//! Los dos colaboradores obligatorios (borradores y persistencia) entran por
//! el constructor; el resto (notifier, invalidación de caché, proyección,
//! ventana de debounce, semilla de datos) tiene valores por defecto
//! razonables y se afina encadenando.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use uuid::Uuid;

use crate::autosave::AutosaveTimer;
use crate::constants::{DEFAULT_AUTOSAVE_DEBOUNCE_MS, DEFAULT_WIZARD_KIND};
use crate::engine::{Projection, WizardEngine};
use crate::errors::WizardError;
use crate::model::{DraftKey, WizardData, WizardState};
use crate::registry::StepRegistry;
use crate::step::StepDefinition;
use crate::store::{CacheInvalidator, DraftStore, EntityPersistence, Notifier, NullCacheInvalidator,
                   NullNotifier};

pub struct WizardBuilder<D, P>
    where D: DraftStore + 'static,
          P: EntityPersistence + 'static
{
    draft_store: D,
    persistence: P,
    steps: Vec<StepDefinition>,
    notifier: Arc<dyn Notifier>,
    cache: Arc<dyn CacheInvalidator>,
    invalidation_keys: Vec<String>,
    projection: Projection,
    owner_id: String,
    wizard_kind: String,
    entity_id: Option<Uuid>,
    seed: WizardData,
    debounce: Duration,
}

impl<D, P> WizardBuilder<D, P>
    where D: DraftStore + 'static,
          P: EntityPersistence + 'static
{
    pub(crate) fn new(draft_store: D, persistence: P) -> Self {
        Self { draft_store,
               persistence,
               steps: Vec::new(),
               notifier: Arc::new(NullNotifier),
               cache: Arc::new(NullCacheInvalidator),
               invalidation_keys: Vec::new(),
               projection: Arc::new(|data: &WizardData| data.as_value()),
               owner_id: "anonymous".to_string(),
               wizard_kind: DEFAULT_WIZARD_KIND.to_string(),
               entity_id: None,
               seed: WizardData::new(),
               debounce: Duration::from_millis(DEFAULT_AUTOSAVE_DEBOUNCE_MS) }
    }

    pub fn step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps<I>(mut self, steps: I) -> Self
        where I: IntoIterator<Item = StepDefinition>
    {
        self.steps.extend(steps);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn cache_invalidator(mut self, cache: Arc<dyn CacheInvalidator>) -> Self {
        self.cache = cache;
        self
    }

    /// Claves lógicas a invalidar tras un envío exitoso.
    pub fn invalidates<I, S>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.invalidation_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Proyección del data acumulado a la forma canónica de envío.
    pub fn projection<F>(mut self, projection: F) -> Self
        where F: Fn(&WizardData) -> Value + Send + Sync + 'static
    {
        self.projection = Arc::new(projection);
        self
    }

    pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn kind(mut self, wizard_kind: impl Into<String>) -> Self {
        self.wizard_kind = wizard_kind.into();
        self
    }

    /// Sesión de creación con datos iniciales (por ejemplo valores por
    /// defecto del formulario).
    pub fn seed(mut self, seed: WizardData) -> Self {
        self.seed = seed;
        self
    }

    /// Sesión de edición de una entidad existente: su id clavea el borrador
    /// y dirige el envío final a `update` en vez de `create`.
    pub fn editing(mut self, entity_id: Uuid, seed: WizardData) -> Self {
        self.entity_id = Some(entity_id);
        self.seed = seed;
        self
    }

    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }

    pub fn build(self) -> Result<WizardEngine<D, P>, WizardError> {
        if self.steps.is_empty() {
            return Err(WizardError::EmptyRegistry);
        }

        let registry = StepRegistry::new(self.steps);
        let state = WizardState::new(self.seed.clone(), self.entity_id);
        let key = DraftKey::new(self.owner_id, self.wizard_kind, self.entity_id);

        Ok(WizardEngine::from_parts(registry,
                                    state,
                                    self.seed,
                                    Arc::new(self.draft_store),
                                    Arc::new(self.persistence),
                                    self.notifier,
                                    self.cache,
                                    self.invalidation_keys,
                                    self.projection,
                                    key,
                                    AutosaveTimer::new(self.debounce)))
    }
}
