pub mod app_config;
mod config;
pub mod geo;
mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use types::{Coordinates, CoreError, Park, ParkCategory, Theme, UserLocation};
