use tokio::sync::watch;

/// Sender half: flips every paired [`CancellationSignal`] to cancelled.
#[derive(Debug)]
pub struct CancellationHandle(watch::Sender<bool>);

/// Receiver half handed to in-flight pipelines.
#[derive(Debug, Clone)]
pub struct CancellationSignal(watch::Receiver<bool>);

pub fn cancellation_pair() -> (CancellationHandle, CancellationSignal) {
    let (tx, rx) = watch::channel(false);
    (CancellationHandle(tx), CancellationSignal(rx))
}

impl CancellationHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

impl CancellationSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self(rx)
    }

    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves once cancelled. Pends forever if the handle is dropped first.
    pub async fn cancelled(&mut self) {
        if self.0.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
