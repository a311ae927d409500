use std::time::Duration;

use serde::Deserialize;
use shared::{
    domain::{
        DEFAULT_COLD_ITEM_COUNT, DEFAULT_COLD_ITEM_DELAY_MS, DEFAULT_EVENT_CAPACITY,
        INITIAL_STATE_TEXT,
    },
    error::ConfigError,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub initial_state: String,
    /// Unset leaves the observable value empty until its first trigger.
    pub initial_observable: Option<String>,
    pub cold_item_count: usize,
    pub cold_item_delay_ms: u64,
    pub event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_state: INITIAL_STATE_TEXT.into(),
            initial_observable: None,
            cold_item_count: DEFAULT_COLD_ITEM_COUNT,
            cold_item_delay_ms: DEFAULT_COLD_ITEM_DELAY_MS,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreConfig {
    pub fn cold_item_delay(&self) -> Duration {
        Duration::from_millis(self.cold_item_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cold_item_count == 0 {
            return Err(ConfigError::MustBePositive {
                field: "cold_item_count",
            });
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::MustBePositive {
                field: "event_capacity",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
