//! Conjunto visible de longitud variable: predicados evaluados frescos en
//! cada decisión, progreso derivado y el caso degenerado sin pasos visibles.

use serde_json::json;

use adm_core::{InMemoryDraftStore, InMemoryEntityPersistence, StepDefinition, VisibilityRule,
               WizardEngine, WizardError};

#[tokio::test]
async fn conditional_step_moves_the_terminal_index() {
    let mut engine = WizardEngine::builder(InMemoryDraftStore::new(), InMemoryEntityPersistence::new())
        .step(StepDefinition::new("basic", "Basics").require_field("name"))
        .step(StepDefinition::new("scholarship-info", "Scholarship details")
            .visible_when(VisibilityRule::WhenPresent("scholarship".into())))
        .step(StepDefinition::new("review", "Review"))
        .build()
        .expect("engine");

    assert_eq!(engine.visible_step_ids(), vec!["basic", "review"]);
    assert_eq!(engine.progress(), 50);

    // La selección prerrequisito inserta el paso informativo en medio.
    engine.on_data_change(json!({"name": "x", "scholarship": "merit"}));
    assert_eq!(engine.visible_step_ids(), vec!["basic", "scholarship-info", "review"]);
    assert_eq!(engine.progress(), 33);

    engine.next().await.expect("basic");
    let step = engine.current_step().expect("current");
    assert_eq!(step.id(), "scholarship-info");
}

#[tokio::test]
async fn all_steps_hidden_is_reported_not_guessed() {
    let mut engine = WizardEngine::builder(InMemoryDraftStore::new(), InMemoryEntityPersistence::new())
        .step(StepDefinition::new("only", "Only")
            .visible_when(VisibilityRule::WhenPresent("never".into())))
        .build()
        .expect("engine");

    assert!(engine.current_step().is_none());
    assert_eq!(engine.progress(), 0);
    assert_eq!(engine.next().await.expect_err("no steps"), WizardError::NoVisibleSteps);
}

#[test]
fn empty_registry_is_rejected_at_build_time() {
    let result = WizardEngine::builder(InMemoryDraftStore::new(), InMemoryEntityPersistence::new()).build();
    assert!(matches!(result, Err(WizardError::EmptyRegistry)));
}
