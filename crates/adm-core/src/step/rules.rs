//! Reglas declarativas de visibilidad y validez.
//!
//! Cada `StepDefinition` posee exactamente una regla de validez; componer
//! varias clases de regla para un mismo paso se hace con `AllOf`/`AnyOf`
//! dentro de la propia regla, nunca en el engine.

use std::fmt;
use std::sync::Arc;

use crate::model::WizardData;

/// Predicado arbitrario sobre el objeto acumulado.
pub type Predicate = Arc<dyn Fn(&WizardData) -> bool + Send + Sync>;

/// Clases de regla de validez reconocidas por el gate.
#[derive(Clone)]
pub enum ValidationRule {
    /// Paso informativo u opcional: siempre pasa.
    Always,
    /// Escalar requerido: no nulo y no vacío (string/número).
    RequiredField(String),
    /// Colección requerida: arreglo con longitud >= 1.
    NonEmptyList(String),
    /// OR compuesto: válida si alguna sub-regla pasa.
    AnyOf(Vec<ValidationRule>),
    /// AND compuesto: válida si todas las sub-reglas pasan.
    AllOf(Vec<ValidationRule>),
    /// Predicado arbitrario del host. Debe ser total: nunca panic, claves
    /// ausentes cuentan como inválidas.
    Custom(Predicate),
}

impl ValidationRule {
    /// Atajo: cualquiera de las listas nombradas no vacía (dos caminos de
    /// datos alternativos satisfacen el mismo requisito).
    pub fn any_non_empty_list<I, S>(keys: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        ValidationRule::AnyOf(keys.into_iter()
                                  .map(|k| ValidationRule::NonEmptyList(k.into()))
                                  .collect())
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Always => write!(f, "Always"),
            ValidationRule::RequiredField(key) => write!(f, "RequiredField({key})"),
            ValidationRule::NonEmptyList(key) => write!(f, "NonEmptyList({key})"),
            ValidationRule::AnyOf(rules) => f.debug_tuple("AnyOf").field(rules).finish(),
            ValidationRule::AllOf(rules) => f.debug_tuple("AllOf").field(rules).finish(),
            ValidationRule::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Reglas de visibilidad: permiten listas de pasos de longitud variable en
/// función del objeto acumulado.
#[derive(Clone)]
pub enum VisibilityRule {
    Always,
    /// Visible sólo cuando la clave existe y no es `null`.
    WhenPresent(String),
    /// Predicado arbitrario del host.
    When(Predicate),
}

impl fmt::Debug for VisibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityRule::Always => write!(f, "Always"),
            VisibilityRule::WhenPresent(key) => write!(f, "WhenPresent({key})"),
            VisibilityRule::When(_) => write!(f, "When(..)"),
        }
    }
}
