use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration, sourced from `PARKSCOUT_*` environment
/// variables. Every value has a default; nothing is required.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory the cache store writes its per-key JSON envelopes to.
    pub cache_dir: PathBuf,
    pub overpass_url: String,
    pub overpass_timeout_secs: u64,
    pub user_agent: String,
    pub search_radius_meters: u32,
    pub search_limit: usize,
    pub parks_cache_ttl_secs: u64,
    pub location_cache_ttl_secs: u64,
    pub location_timeout_secs: u64,
    pub location_max_age_secs: u64,
}
