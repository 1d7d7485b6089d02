//! ValidationGate: evaluación pura de reglas contra el objeto acumulado.
//!
//! Sin efectos secundarios y total sobre cualquier forma de dato que el
//! wizard pueda sostener: una clave ausente o con el tipo equivocado cuenta
//! como inválida, nunca como error.

use serde_json::Value;

use crate::model::WizardData;
use crate::step::{StepDefinition, ValidationRule, VisibilityRule};

/// Gate de avance: `next()` sólo procede cuando esto devuelve `true`.
pub fn step_is_valid(step: &StepDefinition, data: &WizardData) -> bool {
    rule_holds(step.validity(), data)
}

/// Evaluado fresco en cada decisión de navegación, nunca cacheado: una
/// mutación puede cambiar el conjunto visible y con él qué índice es el
/// terminal.
pub fn step_is_visible(step: &StepDefinition, data: &WizardData) -> bool {
    match step.visibility() {
        VisibilityRule::Always => true,
        VisibilityRule::WhenPresent(key) => !matches!(data.get(key), None | Some(Value::Null)),
        VisibilityRule::When(predicate) => predicate(data),
    }
}

pub fn rule_holds(rule: &ValidationRule, data: &WizardData) -> bool {
    match rule {
        ValidationRule::Always => true,
        ValidationRule::RequiredField(key) => scalar_present(data.get(key)),
        ValidationRule::NonEmptyList(key) => {
            matches!(data.get(key), Some(Value::Array(items)) if !items.is_empty())
        }
        ValidationRule::AnyOf(rules) => rules.iter().any(|r| rule_holds(r, data)),
        ValidationRule::AllOf(rules) => rules.iter().all(|r| rule_holds(r, data)),
        ValidationRule::Custom(predicate) => predicate(data),
    }
}

/// Escalar presente: no nulo y no vacío. Colecciones y objetos cuentan como
/// presentes cuando no están vacíos.
fn scalar_present(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => true,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Null) | None => false,
    }
}
