//! Solicitud de admisión: el wizard guiado que completa el aspirante.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use adm_core::store::Entity;
use adm_core::{StepDefinition, ValidationRule, VisibilityRule, WizardData};

use crate::errors::DomainError;

/// Forma canónica de la solicitud enviada.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub program_id: Option<Uuid>,
    #[serde(default)]
    pub uploads: Vec<String>,
    #[serde(default)]
    pub mail_in_documents: Vec<String>,
    #[serde(default)]
    pub scholarship: Option<String>,
}

impl ApplicationPayload {
    pub fn from_data(data: &WizardData) -> Self {
        serde_json::from_value(data.as_value()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    #[serde(flatten)]
    pub payload: ApplicationPayload,
}

impl Application {
    pub fn from_entity(entity: &Entity) -> Result<Self, DomainError> {
        let payload: ApplicationPayload = serde_json::from_value(entity.payload.clone())
            .map_err(|e| DomainError::InvalidPayload(e.to_string()))?;
        if payload.full_name.trim().is_empty() {
            return Err(DomainError::MissingField("full_name".into()));
        }
        Ok(Self { id: entity.id, payload })
    }
}

/// Pasos del wizard del aspirante.
///
/// El perfil compone dos escalares requeridos con `AllOf` dentro de la
/// propia regla; los documentos aceptan carga digital o envío postal; el
/// paso de becas sólo aparece si el aspirante marcó interés.
pub fn applicant_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("profile", "Applicant profile")
            .valid_when(ValidationRule::AllOf(vec![
                ValidationRule::RequiredField("full_name".into()),
                ValidationRule::RequiredField("email".into()),
            ])),
        StepDefinition::new("program-choice", "Choose a program").require_field("program_id"),
        StepDefinition::new("documents", "Supporting documents")
            .valid_when(ValidationRule::any_non_empty_list(["uploads", "mail_in_documents"])),
        StepDefinition::new("scholarship", "Scholarship application")
            .visible_when(VisibilityRule::WhenPresent("scholarship".into())),
        StepDefinition::new("review", "Review and submit"),
    ]
}

pub fn projection(data: &WizardData) -> Value {
    serde_json::to_value(ApplicationPayload::from_data(data)).unwrap_or(Value::Null)
}
