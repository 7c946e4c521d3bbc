use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparsable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparsable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PARKSCOUT_ENV", "development"));
    let log_level = or_default("PARKSCOUT_LOG_LEVEL", "info");
    let cache_dir = PathBuf::from(or_default("PARKSCOUT_CACHE_DIR", "./.parkscout"));

    let overpass_url = or_default(
        "PARKSCOUT_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let overpass_timeout_secs = parse_u64("PARKSCOUT_OVERPASS_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PARKSCOUT_USER_AGENT", "parkscout/0.1 (park-discovery)");

    let search_radius_meters = parse_u32("PARKSCOUT_SEARCH_RADIUS_METERS", "3000")?;
    let search_limit = parse_usize("PARKSCOUT_SEARCH_LIMIT", "5")?;

    let parks_cache_ttl_secs = parse_u64("PARKSCOUT_PARKS_CACHE_TTL_SECS", "300")?;
    let location_cache_ttl_secs = parse_u64("PARKSCOUT_LOCATION_CACHE_TTL_SECS", "3600")?;
    let location_timeout_secs = parse_u64("PARKSCOUT_LOCATION_TIMEOUT_SECS", "10")?;
    let location_max_age_secs = parse_u64("PARKSCOUT_LOCATION_MAX_AGE_SECS", "300")?;

    Ok(AppConfig {
        env,
        log_level,
        cache_dir,
        overpass_url,
        overpass_timeout_secs,
        user_agent,
        search_radius_meters,
        search_limit,
        parks_cache_ttl_secs,
        location_cache_ttl_secs,
        location_timeout_secs,
        location_max_age_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
