//! Temporizador de autosave con debounce.
//!
//! Disciplina de un solo timer pendiente por sesión: cada re-armado cancela
//! el commit agendado antes de agendar el nuevo, así una ráfaga de ediciones
//! produce exactamente un snapshot persistido con el estado final fusionado,
//! no una escritura por tecla. El handle es un recurso poseído y cancelable,
//! ligado a la vida de la sesión: se aborta en teardown y en `Drop`, de modo
//! que un snapshot obsoleto no puede aterrizar en la clave de una sesión
//! posterior.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct AutosaveTimer {
    window: Duration,
    handle: Option<JoinHandle<()>>,
}

impl AutosaveTimer {
    pub fn new(window: Duration) -> Self {
        Self { window, handle: None }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// (Re)arma el timer: cancela el commit pendiente, si existe, y agenda
    /// `commit` para después de la ventana de debounce.
    pub fn arm<F>(&mut self, commit: F)
        where F: Future<Output = ()> + Send + 'static
    {
        self.cancel();
        // El deadline se fija en el momento del armado, no en el primer poll
        // del task: la ventana de debounce corre desde el re-armado.
        let sleep = tokio::time::sleep(self.window);
        self.handle = Some(tokio::spawn(async move {
            sleep.await;
            commit.await;
        }));
    }

    /// Cancela el commit pendiente. Idempotente.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl Drop for AutosaveTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn rearming_cancels_the_previous_commit() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = AutosaveTimer::new(Duration::from_millis(100));

        for _ in 0..3 {
            let fired = Arc::clone(&fired);
            timer.arm(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::advance(Duration::from_millis(50)).await;
        }

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;

        assert_eq!(fired.load(Ordering::SeqCst), 1, "only the last arm may fire");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_the_pending_commit() {
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let mut timer = AutosaveTimer::new(Duration::from_millis(100));
            let fired = Arc::clone(&fired);
            timer.arm(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;

        assert_eq!(fired.load(Ordering::SeqCst), 0, "dropped timer must not fire");
    }
}
