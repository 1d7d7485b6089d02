//! StepRegistry: lista ordenada e inmutable de definiciones de pasos.

use crate::gate;
use crate::model::WizardData;
use crate::step::StepDefinition;

#[derive(Debug, Default)]
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Lista completa, visible o no.
    pub fn all(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Filtra por visibilidad contra el objeto acumulado. Se computa fresco
    /// en cada decisión de navegación: una mutación puede insertar o quitar
    /// pasos, y con ello mover el índice terminal.
    pub fn visible<'a>(&'a self, data: &WizardData) -> Vec<&'a StepDefinition> {
        self.steps
            .iter()
            .filter(|step| gate::step_is_visible(step, data))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::VisibilityRule;
    use serde_json::json;

    #[test]
    fn visible_set_tracks_data_between_calls() {
        let registry = StepRegistry::new(vec![
            StepDefinition::new("basic", "Basics"),
            StepDefinition::new("scholarship-info", "Scholarship details")
                .visible_when(VisibilityRule::WhenPresent("scholarship".into())),
            StepDefinition::new("review", "Review"),
        ]);

        let mut data = WizardData::new();
        assert_eq!(registry.visible(&data).len(), 2);

        data.merge(json!({"scholarship": "need-based"}));
        let visible = registry.visible(&data);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[1].id(), "scholarship-info");
    }
}
