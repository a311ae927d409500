use std::future::Future;

use tokio::{
    sync::watch,
    task::{JoinError, JoinSet},
};
use tracing::{debug, warn};

/// Set of tasks bound to an owner.
///
/// `shutdown` raises the scope's close signal and waits for every task to
/// return; tasks spawned here are expected to watch [`TaskScope::close_signal`].
/// Dropping the scope aborts everything still running in it.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TaskScope {
    name: &'static str,
    tasks: JoinSet<()>,
    closing: watch::Sender<bool>,
}

/// Resolves once the owning scope starts shutting down or is dropped.
#[derive(Debug, Clone)]
pub struct CloseSignal(watch::Receiver<bool>);

impl CloseSignal {
    pub async fn closed(&mut self) {
        // A dropped sender means the scope is gone; treat it as closed.
        let _ = self.0.wait_for(|closed| *closed).await;
    }
}

impl TaskScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: JoinSet::new(),
            closing: watch::Sender::new(false),
        }
    }

    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.reap();
        self.tasks.spawn(task);
    }

    pub fn close_signal(&self) -> CloseSignal {
        CloseSignal(self.closing.subscribe())
    }

    /// Number of tasks that have not finished yet.
    pub fn len(&mut self) -> usize {
        self.reap();
        self.tasks.len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Raises the close signal and waits until every task has returned.
    pub async fn shutdown(&mut self) {
        let running = self.tasks.len();
        self.closing.send_replace(true);
        while let Some(result) = self.tasks.join_next().await {
            self.report(result);
        }
        debug!(scope = self.name, running, "task scope shut down");
    }

    fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            self.report(result);
        }
    }

    fn report(&self, result: Result<(), JoinError>) {
        if let Err(err) = result {
            if err.is_panic() {
                warn!(scope = self.name, error = %err, "scoped task panicked");
            }
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        if !self.tasks.is_empty() {
            debug!(
                scope = self.name,
                running = self.tasks.len(),
                "aborting scoped tasks on drop"
            );
            self.tasks.abort_all();
        }
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
