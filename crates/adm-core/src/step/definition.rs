//! Definición inmutable de un step del wizard.

use super::rules::{ValidationRule, VisibilityRule};

/// Un step: id estable, título presentable y sus dos reglas. Inmutable una
/// vez construido el wizard.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    id: String,
    title: String,
    visibility: VisibilityRule,
    validity: ValidationRule,
}

impl StepDefinition {
    /// Paso siempre visible y siempre válido; las reglas se afinan con los
    /// métodos encadenables.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(),
               title: title.into(),
               visibility: VisibilityRule::Always,
               validity: ValidationRule::Always }
    }

    pub fn visible_when(mut self, rule: VisibilityRule) -> Self {
        self.visibility = rule;
        self
    }

    pub fn valid_when(mut self, rule: ValidationRule) -> Self {
        self.validity = rule;
        self
    }

    /// Atajo: escalar requerido.
    pub fn require_field(self, key: impl Into<String>) -> Self {
        self.valid_when(ValidationRule::RequiredField(key.into()))
    }

    /// Atajo: colección requerida no vacía.
    pub fn require_non_empty(self, key: impl Into<String>) -> Self {
        self.valid_when(ValidationRule::NonEmptyList(key.into()))
    }

    /// Identificador estable y único dentro del wizard.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Título amigable para el indicador de pasos.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn visibility(&self) -> &VisibilityRule {
        &self.visibility
    }

    pub fn validity(&self) -> &ValidationRule {
        &self.validity
    }
}
