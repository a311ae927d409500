//! Binds screen triggers to the store and holder emissions to a UI surface.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use futures::StreamExt;
use shared::domain::HolderKind;
use tracing::{debug, info};

use crate::{
    scope::{CloseSignal, TaskScope},
    store::ValueStore,
    DataHolder, HolderStream,
};

/// The display side of a screen. Calls arrive from the presenter's tasks.
pub trait UiSurface: Send + Sync {
    fn set_text(&self, region: HolderKind, text: &str);

    /// Transient notice such as a toast or snackbar.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Subscribed,
    Unsubscribed,
}

/// Lifecycle owner of one screen.
///
/// `attach` is "owner created" and `destroy` (or drop) is "owner destroyed".
/// The store is retained across presenters, so a presenter attached to the
/// same store replays the observable value and the state stream.
pub struct Presenter {
    store: Arc<ValueStore>,
    surface: Arc<dyn UiSurface>,
    scope: TaskScope,
    cold_runs: Arc<AtomicUsize>,
}

impl Presenter {
    /// Subscriptions are registered before this returns. Must be called
    /// from within a tokio runtime.
    pub fn attach(store: Arc<ValueStore>, surface: Arc<dyn UiSurface>) -> Self {
        let mut scope = TaskScope::new("presenter");

        let observable = store.observable_value().subscribe();
        let state = store.state_stream().subscribe();
        let events = store.event_stream().subscribe();

        scope.spawn(render(
            observable,
            Arc::clone(&surface),
            scope.close_signal(),
            HolderKind::ObservableValue,
            false,
        ));
        scope.spawn(render(
            state,
            Arc::clone(&surface),
            scope.close_signal(),
            HolderKind::StateStream,
            true,
        ));
        scope.spawn(render(
            events,
            Arc::clone(&surface),
            scope.close_signal(),
            HolderKind::EventStream,
            true,
        ));

        info!("presenter attached");
        Self {
            store,
            surface,
            scope,
            cold_runs: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn handle(&mut self, trigger: HolderKind) {
        debug!(trigger = trigger.as_str(), "dispatching trigger");
        match trigger {
            HolderKind::ObservableValue => self.store.trigger_observable_value(),
            HolderKind::StateStream => self.store.trigger_state_stream(),
            HolderKind::EventStream => self.store.trigger_event_stream(),
            HolderKind::ColdSequence => self.collect_cold_sequence(),
        }
    }

    pub fn state(&self, kind: HolderKind) -> SubscriptionState {
        let subscribed = match kind {
            // Held for the whole life of the presenter.
            HolderKind::ObservableValue | HolderKind::StateStream | HolderKind::EventStream => {
                true
            }
            HolderKind::ColdSequence => self.active_cold_runs() > 0,
        };
        if subscribed {
            SubscriptionState::Subscribed
        } else {
            SubscriptionState::Unsubscribed
        }
    }

    pub fn active_cold_runs(&self) -> usize {
        self.cold_runs.load(Ordering::Acquire)
    }

    pub fn store(&self) -> &Arc<ValueStore> {
        &self.store
    }

    /// Renders what the subscriptions have already received, stops in-flight
    /// cold runs before their next item and releases every subscription
    /// before returning.
    pub async fn destroy(mut self) {
        let cold_runs = self.active_cold_runs();
        self.scope.shutdown().await;
        info!(cancelled_cold_runs = cold_runs, "presenter destroyed");
    }

    fn collect_cold_sequence(&mut self) {
        let run = self.store.produce_cold_sequence().subscribe();
        let surface = Arc::clone(&self.surface);
        let closing = self.scope.close_signal();
        let guard = ColdRunGuard::enter(Arc::clone(&self.cold_runs));

        self.scope.spawn(async move {
            let _guard = guard;
            render(run, surface, closing, HolderKind::ColdSequence, false).await;
        });
    }
}

async fn render(
    mut stream: HolderStream<String>,
    surface: Arc<dyn UiSurface>,
    mut closing: CloseSignal,
    region: HolderKind,
    notify: bool,
) {
    // Emissions already queued are rendered before the close signal is honoured.
    loop {
        tokio::select! {
            biased;
            text = stream.next() => match text {
                Some(text) => {
                    surface.set_text(region, &text);
                    if notify {
                        surface.notify(&text);
                    }
                }
                None => {
                    debug!(region = region.as_str(), "holder stream finished");
                    return;
                }
            },
            _ = closing.closed() => {
                debug!(region = region.as_str(), "holder stream closed");
                return;
            }
        }
    }
}

/// Counts a cold run as active until its task completes or is aborted.
struct ColdRunGuard {
    active: Arc<AtomicUsize>,
}

impl ColdRunGuard {
    fn enter(active: Arc<AtomicUsize>) -> Self {
        active.fetch_add(1, Ordering::AcqRel);
        Self { active }
    }
}

impl Drop for ColdRunGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
