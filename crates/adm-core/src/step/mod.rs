//! Definiciones relacionadas a Steps.
//!
//! Un step del wizard es una unidad declarativa: id, título y dos reglas
//! puras (visibilidad y validez) evaluadas contra el objeto acumulado. Los
//! steps son datos, no control de flujo: el wizard de longitud variable es
//! una propiedad de la configuración, no de condicionales dispersos.

pub mod definition;
pub mod rules;

pub use definition::StepDefinition;
pub use rules::{Predicate, ValidationRule, VisibilityRule};
