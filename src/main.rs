//! Demo de punta a punta: un administrador configura un programa académico
//! con el wizard (gate de validación, autosave con debounce, envío) y luego
//! retoma un borrador abandonado en una sesión nueva.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use adm_core::{InMemoryDraftStore, InMemoryEntityPersistence, NextOutcome, Notification, Notifier,
               WizardEngine};
use adm_domain::{program, Program};
use admitflow_rust::config::CONFIG;

/// Notifier de la demo: enruta las notificaciones del engine a `tracing`.
struct LogNotifier;

impl Notifier for LogNotifier {
    fn emit(&self, notification: Notification) {
        tracing::info!(severity = ?notification.severity,
                       title = %notification.title,
                       "{}", notification.description);
    }
}

fn program_setup_engine(store: Arc<InMemoryDraftStore>,
                        persistence: Arc<InMemoryEntityPersistence>)
                        -> WizardEngine<Arc<InMemoryDraftStore>, Arc<InMemoryEntityPersistence>> {
    WizardEngine::builder(store, persistence)
        .steps(program::setup_steps())
        .projection(program::projection)
        .notifier(Arc::new(LogNotifier))
        .invalidates(["programs:list"])
        .owner("admin-1")
        .kind("program-setup")
        .debounce(Duration::from_millis(CONFIG.autosave.debounce_ms))
        .build()
        .expect("program wizard is configured with steps")
}

async fn run_program_setup_demo(persistence: Arc<InMemoryEntityPersistence>) -> Program {
    let store = Arc::new(InMemoryDraftStore::new());
    let mut engine = program_setup_engine(Arc::clone(&store), persistence);

    // El gate bloquea el avance mientras falte el nombre.
    assert!(engine.next().await.is_err(), "basic step must block without a name");
    println!("paso actual: {:?}, progreso: {}%",
             engine.current_step().map(|s| s.title().to_string()),
             engine.progress());

    engine.on_data_change(json!({"name": "Biology BSc", "scholarship": "merit"}));
    engine.next().await.expect("basic step passes");

    // El autosave comete un único snapshot tras la ventana de debounce.
    tokio::time::sleep(Duration::from_millis(CONFIG.autosave.debounce_ms + 200)).await;
    println!("borrador guardado en: {:?}", engine.last_saved());

    engine.on_data_change(json!({
        "fees": [{"label": "tuition", "amount_cents": 1_200_000}],
        "internal_requirements": ["high-school transcript"]
    }));
    engine.next().await.expect("fee schedule passes");
    engine.next().await.expect("requirements pass");

    // El paso informativo de becas está visible porque hay una selección.
    println!("pasos visibles: {:?}", engine.visible_step_ids());
    engine.next().await.expect("scholarship info is informational");

    let entity = match engine.next().await.expect("terminal step submits") {
        NextOutcome::Submitted(entity) => entity,
        other => panic!("expected a submission, got {other:?}"),
    };
    assert!(store.snapshot(engine.draft_key()).is_none(), "draft cleared after submission");

    let created = Program::from_entity(&entity).expect("canonical program");
    println!("programa creado: {} ({})", created.payload.name, created.id);
    created
}

async fn run_resume_demo() {
    let store = Arc::new(InMemoryDraftStore::new());
    let persistence = Arc::new(InMemoryEntityPersistence::new());

    {
        let mut abandoned = program_setup_engine(Arc::clone(&store), Arc::clone(&persistence));
        abandoned.on_data_change(json!({"name": "Chemistry MSc (draft)"}));
        tokio::time::sleep(Duration::from_millis(CONFIG.autosave.debounce_ms + 200)).await;
        // La sesión se descarta sin enviar; el borrador queda persistido.
    }

    let mut resumed = program_setup_engine(store, persistence);
    let found = resumed.restore_draft().await.expect("draft store reachable");
    assert!(found, "the abandoned draft must be found");
    let data = resumed.data();
    println!("sesión retomada con name: {:?}", data.get("name"));
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_filter)))
        .init();

    let persistence = Arc::new(InMemoryEntityPersistence::new());
    let program = run_program_setup_demo(Arc::clone(&persistence)).await;
    assert!(persistence.get(program.id).is_some());

    run_resume_demo().await;
    println!("Demo admitflow: OK");
}
