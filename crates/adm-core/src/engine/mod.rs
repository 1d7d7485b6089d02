//! Engine del wizard: navegación, autosave y coordinación de envío.
//!
//! El `WizardEngine` orquesta `next`/`previous`/`jump_to` contra el estado
//! de sesión, consultando el gate y los predicados de visibilidad del
//! registry en cada decisión. Es genérico sobre los colaboradores de
//! borrador y persistencia, con variantes en memoria para tests.

pub mod builder;
pub mod core;
pub mod submit;

use std::sync::Arc;

use serde_json::Value;

use crate::model::WizardData;

/// Proyección del objeto acumulado a la forma canónica de envío. La provee
/// el host; mapear datos a dominio es responsabilidad del colaborador, no
/// del engine.
pub type Projection = Arc<dyn Fn(&WizardData) -> Value + Send + Sync>;

pub use builder::WizardBuilder;
pub use core::{NextOutcome, WizardEngine};
