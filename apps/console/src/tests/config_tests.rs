use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn empty_file_yields_defaults() {
    let settings = parse_settings("").expect("parse");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.store.initial_state, "Hello World!");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_overrides_only_the_keys_it_names() {
    let settings = parse_settings(
        r#"
log_filter = "debug"

[store]
cold_item_count = 3
initial_observable = "seeded"
"#,
    )
    .expect("parse");

    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.store.cold_item_count, 3);
    assert_eq!(settings.store.initial_observable.as_deref(), Some("seeded"));
    assert_eq!(settings.store.cold_item_delay_ms, 1000);
}

#[test]
fn malformed_file_is_rejected() {
    assert!(parse_settings("[store]\ncold_item_count = \"many\"").is_err());
}

#[test]
fn env_overrides_win_over_file_values() {
    let mut settings = parse_settings("[store]\ncold_item_delay_ms = 10").expect("parse");
    apply_env_overrides(
        &mut settings,
        lookup(&[
            ("DATAHOLDERS__COLD_ITEM_DELAY_MS", "250"),
            ("DATAHOLDERS__INITIAL_STATE", "from env"),
            ("DATAHOLDERS__LOG_FILTER", "warn"),
        ]),
    )
    .expect("overrides");

    assert_eq!(settings.store.cold_item_delay_ms, 250);
    assert_eq!(settings.store.initial_state, "from env");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn non_numeric_env_value_is_reported() {
    let mut settings = Settings::default();
    let err = apply_env_overrides(
        &mut settings,
        lookup(&[("DATAHOLDERS__EVENT_CAPACITY", "lots")]),
    )
    .expect_err("invalid capacity");

    assert_eq!(err, ConfigError::invalid_value("event_capacity", "lots"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("dataholders_missing_{suffix}.toml"));

    let err = load_settings(Some(&missing)).expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn explicit_file_with_zero_items_fails_validation() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("dataholders_zero_items_{suffix}.toml"));
    fs::write(&path, "[store]\ncold_item_count = 0\n").expect("write config");

    let err = load_settings(Some(&path)).expect_err("zero items");
    assert!(err.to_string().contains("cold_item_count"));

    fs::remove_file(path).expect("cleanup");
}
