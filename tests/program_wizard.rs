//! Integración raíz: el contenido de `adm-domain` montado sobre el engine de
//! `adm-core`, de la creación de un programa a su edición posterior.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use adm_core::{InMemoryDraftStore, InMemoryEntityPersistence, NextOutcome, WizardData, WizardEngine,
               WizardError};
use adm_domain::{program, Program};

fn engine_for(store: Arc<InMemoryDraftStore>,
              persistence: Arc<InMemoryEntityPersistence>)
              -> WizardEngine<Arc<InMemoryDraftStore>, Arc<InMemoryEntityPersistence>> {
    WizardEngine::builder(store, persistence)
        .steps(program::setup_steps())
        .projection(program::projection)
        .owner("admin-1")
        .kind("program-setup")
        .debounce(Duration::from_millis(50))
        .build()
        .expect("program wizard builds")
}

#[tokio::test]
async fn create_program_end_to_end() {
    let store = Arc::new(InMemoryDraftStore::new());
    let persistence = Arc::new(InMemoryEntityPersistence::new());
    let mut engine = engine_for(Arc::clone(&store), Arc::clone(&persistence));

    // Sin nombre el primer paso bloquea y nada cambia.
    assert!(matches!(engine.next().await,
                     Err(WizardError::ValidationFailed { ref step_id }) if step_id == "basic"));
    assert_eq!(engine.current_index(), 0);

    engine.on_data_change(json!({"name": "Biology BSc"}));
    engine.next().await.expect("basic passes");
    engine.on_data_change(json!({"fees": [{"label": "tuition", "amount_cents": 1_200_000}]}));
    engine.next().await.expect("fees pass");
    engine.on_data_change(json!({"internal_requirements": ["transcript"]}));
    engine.next().await.expect("requirements pass");

    // Sin beca seleccionada el paso informativo no existe: review es terminal.
    assert_eq!(engine.visible_step_ids(),
               ["basic", "fees", "requirements", "review"]);

    let outcome = engine.next().await.expect("review submits");
    let entity = match outcome {
        NextOutcome::Submitted(entity) => entity,
        other => panic!("expected submission, got {other:?}"),
    };

    let created = Program::from_entity(&entity).expect("canonical program");
    assert_eq!(created.payload.name, "Biology BSc");
    assert_eq!(created.payload.fees.len(), 1);
    assert_eq!(persistence.len(), 1);
    assert!(!engine.is_draft());
    assert!(store.snapshot(engine.draft_key()).is_none(), "draft cleared on submit");
}

#[tokio::test]
async fn edit_program_updates_in_place() {
    let store = Arc::new(InMemoryDraftStore::new());
    let persistence = Arc::new(InMemoryEntityPersistence::new());

    let entity = {
        let mut engine = engine_for(Arc::clone(&store), Arc::clone(&persistence));
        engine.on_data_change(json!({
            "name": "Chemistry MSc",
            "fees": [{"label": "tuition", "amount_cents": 900_000}],
            "internal_requirements": ["transcript"]
        }));
        loop {
            match engine.next().await.expect("all steps valid") {
                NextOutcome::Advanced { .. } => continue,
                NextOutcome::Submitted(entity) => break entity,
            }
        }
    };

    // Sesión de edición: misma entidad, semilla con la forma persistida.
    let mut editor = WizardEngine::builder(Arc::clone(&store), Arc::clone(&persistence))
        .steps(program::setup_steps())
        .projection(program::projection)
        .owner("admin-1")
        .kind("program-setup")
        .editing(entity.id, WizardData::from_value(entity.payload.clone()))
        .debounce(Duration::from_millis(50))
        .build()
        .expect("editor builds");

    editor.on_data_change(json!({"capacity": 40}));
    // El editor salta directo al final; el envío re-valida todo lo visible.
    let last = editor.visible_step_ids().len() - 1;
    editor.jump_to(last);
    let updated = loop {
        match editor.next().await.expect("edited program still valid") {
            NextOutcome::Advanced { .. } => continue,
            NextOutcome::Submitted(entity) => break entity,
        }
    };

    assert_eq!(updated.id, entity.id, "update keeps the entity id");
    assert_eq!(persistence.len(), 1, "no second entity created");
    let stored = Program::from_entity(&updated).expect("canonical program");
    assert_eq!(stored.payload.capacity, Some(40));
    assert_eq!(stored.payload.name, "Chemistry MSc");
}

#[tokio::test]
async fn invalid_edit_is_caught_at_submission() {
    let store = Arc::new(InMemoryDraftStore::new());
    let persistence = Arc::new(InMemoryEntityPersistence::new());
    let mut engine = engine_for(Arc::clone(&store), Arc::clone(&persistence));

    engine.on_data_change(json!({
        "name": "History BA",
        "internal_requirements": ["transcript"]
    }));
    // Salto libre hasta review con el paso de fees aún vacío.
    engine.jump_to(3);

    let err = engine.next().await.expect_err("submission must re-validate fees");
    assert_eq!(err, WizardError::ValidationFailed { step_id: "fees".into() });
    assert_eq!(persistence.len(), 0, "nothing persisted on a failed submission");
}
