//! Resumabilidad: una sesión nueva se re-siembra desde el borrador
//! persistido de la anterior, y un timer cancelado no contamina la clave.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use adm_core::{InMemoryDraftStore, InMemoryEntityPersistence, StepDefinition, WizardEngine};

const WINDOW: Duration = Duration::from_millis(2_000);

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

fn engine_with(store: Arc<InMemoryDraftStore>)
               -> WizardEngine<Arc<InMemoryDraftStore>, InMemoryEntityPersistence> {
    WizardEngine::builder(store, InMemoryEntityPersistence::new())
        .step(StepDefinition::new("basic", "Basics").require_field("name"))
        .step(StepDefinition::new("review", "Review"))
        .owner("admin-1")
        .kind("program-setup")
        .debounce(WINDOW)
        .build()
        .expect("engine")
}

#[tokio::test(start_paused = true)]
async fn a_new_session_resumes_from_the_persisted_draft() {
    let store = Arc::new(InMemoryDraftStore::new());

    {
        let mut first = engine_with(Arc::clone(&store));
        first.on_data_change(json!({"name": "Draft program"}));
        tokio::time::advance(WINDOW + Duration::from_millis(10)).await;
        settle().await;
        assert!(store.snapshot(first.draft_key()).is_some());
    }

    let mut second = engine_with(Arc::clone(&store));
    assert!(second.restore_draft().await.expect("load"), "draft must be found");
    assert_eq!(second.data().get("name"), Some(&json!("Draft program")));
    assert!(second.is_draft());
    assert!(second.last_saved().is_some());

    // Los flags de completitud no viajan en el snapshot.
    assert_eq!(second.completed_flags(), vec![false, false]);
}

#[tokio::test]
async fn restore_without_a_draft_reports_false() {
    let store = Arc::new(InMemoryDraftStore::new());
    let mut engine = engine_with(store);
    assert!(!engine.restore_draft().await.expect("load"));
    assert!(!engine.is_draft());
}

#[tokio::test(start_paused = true)]
async fn a_cancelled_session_leaves_no_snapshot_for_its_successor() {
    let store = Arc::new(InMemoryDraftStore::new());

    {
        let mut abandoned = engine_with(Arc::clone(&store));
        abandoned.on_data_change(json!({"name": "stale edit"}));
        abandoned.cancel_session();
    }
    tokio::time::advance(WINDOW * 2).await;
    settle().await;

    let mut next_session = engine_with(Arc::clone(&store));
    assert!(!next_session.restore_draft().await.expect("load"),
            "the cancelled session's timer must not have written anything");
}
