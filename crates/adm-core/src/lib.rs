//! adm-core: motor de wizard multi-paso.
//!
//! Secuenciación de pasos sobre un objeto de datos acumulado, gate de
//! validación por paso, autosave de borradores con debounce, progreso
//! derivado y coordinación del envío final. El contenido de los pasos, los
//! backends de persistencia y el render de notificaciones quedan fuera: son
//! colaboradores que el host inyecta (ver `store`).

pub mod autosave;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod gate;
pub mod model;
pub mod progress;
pub mod registry;
pub mod step;
pub mod store;
mod sync;

pub use engine::{NextOutcome, Projection, WizardBuilder, WizardEngine};
pub use errors::WizardError;
pub use model::{DraftKey, DraftSnapshot, WizardData, WizardState};
pub use registry::StepRegistry;
pub use step::{StepDefinition, ValidationRule, VisibilityRule};
pub use store::{CacheInvalidator, CollectingNotifier, DraftStore, Entity, EntityPersistence,
                InMemoryDraftStore, InMemoryEntityPersistence, Notification, Notifier,
                NullCacheInvalidator, NullNotifier, RecordingCacheInvalidator, Severity, StoreError};
