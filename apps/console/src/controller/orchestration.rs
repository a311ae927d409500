//! Screen orchestration: routes console commands to the presenter and
//! recreates the presenter on rotation against the same retained store.

use std::{io::Write, sync::Arc};

use dataholders::{Presenter, StoreSnapshot, UiSurface, ValueStore};
use serde::Serialize;
use tracing::{debug, info};

use crate::controller::events::{ConsoleCommand, HELP_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub store: StoreSnapshot,
    pub rotations: usize,
    pub active_cold_runs: usize,
}

pub struct ScreenController {
    store: Arc<ValueStore>,
    surface: Arc<dyn UiSurface>,
    presenter: Option<Presenter>,
    rotations: usize,
}

impl ScreenController {
    pub fn new(store: Arc<ValueStore>, surface: Arc<dyn UiSurface>) -> Self {
        let presenter = Presenter::attach(Arc::clone(&store), Arc::clone(&surface));
        Self {
            store,
            surface,
            presenter: Some(presenter),
            rotations: 0,
        }
    }

    pub async fn dispatch(
        &mut self,
        command: ConsoleCommand,
        out: &mut dyn Write,
    ) -> anyhow::Result<Flow> {
        debug!(command = command.name(), "dispatching console command");

        match command {
            ConsoleCommand::Trigger(kind) => self.presenter().handle(kind),
            ConsoleCommand::Rotate => self.rotate().await,
            ConsoleCommand::Status => {
                serde_json::to_writer_pretty(&mut *out, &self.status())?;
                writeln!(out)?;
            }
            ConsoleCommand::Wait(duration) => tokio::time::sleep(duration).await,
            ConsoleCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            ConsoleCommand::Quit => {
                self.shutdown().await;
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            store: self.store.snapshot(),
            rotations: self.rotations,
            active_cold_runs: self
                .presenter
                .as_ref()
                .map_or(0, Presenter::active_cold_runs),
        }
    }

    /// Destroys the current presenter, if any, and waits for its tasks to stop.
    pub async fn shutdown(&mut self) {
        if let Some(presenter) = self.presenter.take() {
            presenter.destroy().await;
        }
    }

    async fn rotate(&mut self) {
        self.shutdown().await;
        self.rotations += 1;
        self.presenter = Some(Presenter::attach(
            Arc::clone(&self.store),
            Arc::clone(&self.surface),
        ));
        info!(rotations = self.rotations, "screen recreated");
    }

    fn presenter(&mut self) -> &mut Presenter {
        self.presenter.get_or_insert_with(|| {
            Presenter::attach(Arc::clone(&self.store), Arc::clone(&self.surface))
        })
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
