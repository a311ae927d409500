use std::sync::Arc;

use serde::Serialize;
use shared::domain::{
    cold_item_text, EVENT_TRIGGERED_TEXT, OBSERVABLE_TRIGGERED_TEXT, STATE_TRIGGERED_TEXT,
};
use tracing::debug;

use crate::{
    cold::ColdSequence,
    config::StoreConfig,
    event::EventStream,
    observable::ObservableValue,
    state::StateStream,
    timer::{Timer, TokioTimer},
    DataHolder,
};

/// Retained store owning one holder of each kind.
///
/// Share it behind an `Arc` so it outlives the presenters attached to it;
/// holders are only mutated through the `trigger_*` operations.
#[derive(Debug)]
pub struct ValueStore {
    observable: ObservableValue<String>,
    state: StateStream<String>,
    events: EventStream<String>,
    cold: ColdSequence<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub observable_value: Option<String>,
    pub state_stream: String,
    pub observable_subscribers: usize,
    pub state_subscribers: usize,
    pub event_subscribers: usize,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        Self::with_timer(config, Arc::new(TokioTimer))
    }

    pub fn with_timer(config: &StoreConfig, timer: Arc<dyn Timer>) -> Self {
        let observable = match &config.initial_observable {
            Some(value) => ObservableValue::with_value(value.clone()),
            None => ObservableValue::new(),
        };
        let items: Vec<String> = (1..=config.cold_item_count).map(cold_item_text).collect();

        Self {
            observable,
            state: StateStream::new(config.initial_state.clone()),
            events: EventStream::new(config.event_capacity),
            cold: ColdSequence::new(items, config.cold_item_delay(), timer),
        }
    }

    pub fn trigger_observable_value(&self) {
        self.observable.set(OBSERVABLE_TRIGGERED_TEXT.to_string());
        debug!(
            subscribers = self.observable.subscriber_count(),
            "observable value set"
        );
    }

    pub fn trigger_state_stream(&self) {
        let changed = self.state.set(STATE_TRIGGERED_TEXT.to_string());
        debug!(changed, "state stream set");
    }

    pub fn trigger_event_stream(&self) {
        let delivered = self.events.emit(EVENT_TRIGGERED_TEXT.to_string());
        if delivered > 0 {
            debug!(delivered, "event stream emitted");
        }
    }

    pub fn produce_cold_sequence(&self) -> ColdSequence<String> {
        self.cold.clone()
    }

    pub fn observable_value(&self) -> &ObservableValue<String> {
        &self.observable
    }

    pub fn state_stream(&self) -> &StateStream<String> {
        &self.state
    }

    pub fn event_stream(&self) -> &EventStream<String> {
        &self.events
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            observable_value: self.observable.current(),
            state_stream: self.state.value(),
            observable_subscribers: self.observable.subscriber_count(),
            state_subscribers: self.state.subscriber_count(),
            event_subscribers: self.events.subscriber_count(),
        }
    }
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
