use std::{fs, io, path::Path, str::FromStr};

use anyhow::Context;
use dataholders::StoreConfig;
use serde::Deserialize;
use shared::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "dataholders.toml";
const ENV_PREFIX: &str = "DATAHOLDERS__";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_filter: String,
    pub store: StoreConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            store: StoreConfig::default(),
        }
    }
}

/// Defaults, then the TOML file, then `DATAHOLDERS__*` environment variables.
///
/// A missing `dataholders.toml` in the working directory is fine; a missing
/// file passed explicitly is an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            parse_settings(&raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?
        }
        None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(raw) => parse_settings(&raw)
                .with_context(|| format!("invalid config file '{DEFAULT_CONFIG_FILE}'"))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config file '{DEFAULT_CONFIG_FILE}'"))
            }
        },
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    settings.store.validate()?;
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str(raw)?)
}

pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(v) = var("LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = var("INITIAL_STATE") {
        settings.store.initial_state = v;
    }
    if let Some(v) = var("INITIAL_OBSERVABLE") {
        settings.store.initial_observable = Some(v);
    }
    if let Some(v) = var("COLD_ITEM_COUNT") {
        settings.store.cold_item_count = parse_number("cold_item_count", &v)?;
    }
    if let Some(v) = var("COLD_ITEM_DELAY_MS") {
        settings.store.cold_item_delay_ms = parse_number("cold_item_delay_ms", &v)?;
    }
    if let Some(v) = var("EVENT_CAPACITY") {
        settings.store.event_capacity = parse_number("event_capacity", &v)?;
    }

    Ok(())
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid_value(field, raw))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
