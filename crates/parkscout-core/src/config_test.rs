use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

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
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_applies_all_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should always parse");

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.cache_dir, PathBuf::from("./.parkscout"));
    assert_eq!(
        cfg.overpass_url,
        "https://overpass-api.de/api/interpreter"
    );
    assert_eq!(cfg.overpass_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "parkscout/0.1 (park-discovery)");
    assert_eq!(cfg.search_radius_meters, 3000);
    assert_eq!(cfg.search_limit, 5);
    assert_eq!(cfg.parks_cache_ttl_secs, 300);
    assert_eq!(cfg.location_cache_ttl_secs, 3600);
    assert_eq!(cfg.location_timeout_secs, 10);
    assert_eq!(cfg.location_max_age_secs, 300);
}

#[test]
fn build_app_config_honors_overrides() {
    let mut map = HashMap::new();
    map.insert("PARKSCOUT_ENV", "production");
    map.insert("PARKSCOUT_SEARCH_RADIUS_METERS", "1500");
    map.insert("PARKSCOUT_SEARCH_LIMIT", "10");
    map.insert("PARKSCOUT_OVERPASS_URL", "http://localhost:9999/interpreter");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.search_radius_meters, 1500);
    assert_eq!(cfg.search_limit, 10);
    assert_eq!(cfg.overpass_url, "http://localhost:9999/interpreter");
}

#[test]
fn build_app_config_rejects_invalid_radius() {
    let mut map = HashMap::new();
    map.insert("PARKSCOUT_SEARCH_RADIUS_METERS", "three-km");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKSCOUT_SEARCH_RADIUS_METERS"),
        "expected InvalidEnvVar(PARKSCOUT_SEARCH_RADIUS_METERS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_ttl() {
    let mut map = HashMap::new();
    map.insert("PARKSCOUT_PARKS_CACHE_TTL_SECS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKSCOUT_PARKS_CACHE_TTL_SECS"),
        "expected InvalidEnvVar(PARKSCOUT_PARKS_CACHE_TTL_SECS), got: {result:?}"
    );
}
