//! Errores del motor de wizard.
//!
//! Taxonomía: `ValidationFailed` es siempre recuperable localmente (el wizard
//! permanece en el mismo paso con los datos intactos); `Submission` es un
//! error bloqueante de reintento; los fallos de autosave nunca llegan aquí,
//! sólo se loguean.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum WizardError {
    #[error("step '{step_id}' is not valid yet")]
    ValidationFailed { step_id: String },
    #[error("submission failed: {0}")]
    Submission(String),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("wizard requires at least one step")]
    EmptyRegistry,
    #[error("no visible steps for the current data")]
    NoVisibleSteps,
    #[error("internal: {0}")]
    Internal(String),
}
