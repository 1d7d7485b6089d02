//! Programa académico: la entidad que construye el wizard de configuración
//! del administrador, más su set de pasos declarativo y la proyección del
//! data acumulado a la forma canónica.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use adm_core::store::Entity;
use adm_core::{StepDefinition, ValidationRule, VisibilityRule, WizardData};

use crate::errors::DomainError;

/// Concepto de cobro de un programa (matrícula, inscripción, laboratorio...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeItem {
    pub label: String,
    pub amount_cents: i64,
}

/// Forma canónica que viaja al colaborador de persistencia.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub fees: Vec<FeeItem>,
    #[serde(default)]
    pub internal_requirements: Vec<String>,
    #[serde(default)]
    pub external_requirements: Vec<String>,
    #[serde(default)]
    pub scholarship: Option<String>,
}

impl ProgramPayload {
    /// Proyección usada por el wizard: toma del data acumulado sólo las
    /// claves que el programa reconoce; lo demás se descarta.
    pub fn from_data(data: &WizardData) -> Self {
        serde_json::from_value(data.as_value()).unwrap_or_default()
    }
}

/// Entidad persistida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    #[serde(flatten)]
    pub payload: ProgramPayload,
}

impl Program {
    pub fn from_entity(entity: &Entity) -> Result<Self, DomainError> {
        let payload: ProgramPayload = serde_json::from_value(entity.payload.clone())
            .map_err(|e| DomainError::InvalidPayload(e.to_string()))?;
        if payload.name.trim().is_empty() {
            return Err(DomainError::MissingField("name".into()));
        }
        Ok(Self { id: entity.id, payload })
    }
}

/// Pasos del wizard de configuración de programa.
///
/// El paso informativo de becas sólo aparece cuando el administrador ya
/// seleccionó un esquema de beca; el de requisitos acepta cualquiera de los
/// dos caminos (requisitos internos o convenios externos).
pub fn setup_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("basic", "Basic information").require_field("name"),
        StepDefinition::new("fees", "Fee schedule").require_non_empty("fees"),
        StepDefinition::new("requirements", "Admission requirements")
            .valid_when(ValidationRule::any_non_empty_list(["internal_requirements",
                                                            "external_requirements"])),
        StepDefinition::new("scholarship-info", "Scholarship details")
            .visible_when(VisibilityRule::WhenPresent("scholarship".into())),
        StepDefinition::new("review", "Review and publish"),
    ]
}

/// Proyección lista para pasar al builder del engine.
pub fn projection(data: &WizardData) -> Value {
    serde_json::to_value(ProgramPayload::from_data(data)).unwrap_or(Value::Null)
}
