use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ITRA_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.site_origin, "https://itra.run");
    assert_eq!(cfg.results_table_id, "RunnerRaceResults");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert!(cfg.enrich_performance_index);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("ITRA_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ITRA_BIND_ADDR"),
        "expected InvalidEnvVar(ITRA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn site_origin_override_strips_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("ITRA_SITE_ORIGIN", "http://127.0.0.1:8080/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_origin, "http://127.0.0.1:8080");
}

#[test]
fn site_origin_without_scheme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("ITRA_SITE_ORIGIN", "itra.run");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ITRA_SITE_ORIGIN"),
        "expected InvalidEnvVar(ITRA_SITE_ORIGIN), got: {result:?}"
    );
}

#[test]
fn results_table_id_with_whitespace_is_rejected() {
    let mut map = HashMap::new();
    map.insert("ITRA_RESULTS_TABLE_ID", "race results");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ITRA_RESULTS_TABLE_ID"),
        "expected InvalidEnvVar(ITRA_RESULTS_TABLE_ID), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("ITRA_REQUEST_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("ITRA_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ITRA_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ITRA_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("ITRA_REQUEST_TIMEOUT_SECS", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("ITRA_USER_AGENT", "itra-test/0.1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "itra-test/0.1");
}

#[test]
fn enrich_flag_accepts_common_spellings() {
    for (raw, expected) in [("false", false), ("0", false), ("YES", true), ("on", true)] {
        let mut map = HashMap::new();
        map.insert("ITRA_ENRICH_PERFORMANCE_INDEX", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.enrich_performance_index, expected, "value {raw}");
    }
}

#[test]
fn enrich_flag_invalid() {
    let mut map = HashMap::new();
    map.insert("ITRA_ENRICH_PERFORMANCE_INDEX", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ITRA_ENRICH_PERFORMANCE_INDEX"),
        "expected InvalidEnvVar(ITRA_ENRICH_PERFORMANCE_INDEX), got: {result:?}"
    );
}
