//! Command-line front-end for the park-discovery pipeline.
//!
//! Obtains a location (explicit coordinates or the cached one), runs the
//! discovery pipeline, and prints the ranked list. All coordination logic
//! lives in the library crates; this binary only wires them together.

use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parkscout_core::{AppConfig, Theme};
use parkscout_discovery::{ParkFinder, SearchOptions};
use parkscout_locate::{LocationProvider, PositionRequest, StaticPositionSource};
use parkscout_overpass::OverpassClient;
use parkscout_store::CacheStore;

#[derive(Debug, Parser)]
#[command(name = "parkscout")]
#[command(about = "Find parks, nature reserves, and gardens near you")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find nearby parks, closest first.
    Nearby {
        /// Latitude to search from; defaults to the cached location.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude to search from; defaults to the cached location.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Search radius in meters.
        #[arg(long)]
        radius_meters: Option<u32>,
        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Inspect or clear the cached location.
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },
    /// Show or set the persisted theme preference.
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

#[derive(Debug, Subcommand)]
enum LocationCommands {
    /// Print the cached location, if any.
    Show,
    /// Drop the cached location.
    Clear,
}

#[derive(Debug, Subcommand)]
enum ThemeCommands {
    /// Print the persisted theme preference.
    Show,
    /// Persist a theme preference.
    Set { theme: Theme },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = parkscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = CacheStore::open(&config.cache_dir);

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearby {
            lat,
            lon,
            radius_meters,
            limit,
        } => nearby(&config, store, lat, lon, radius_meters, limit).await,
        Commands::Location { command } => {
            location(&store, &command);
            Ok(())
        }
        Commands::Theme { command } => {
            theme(&store, &command);
            Ok(())
        }
    }
}

async fn nearby(
    config: &AppConfig,
    store: CacheStore,
    lat: Option<f64>,
    lon: Option<f64>,
    radius_meters: Option<u32>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let location = match (lat, lon) {
        (Some(lat), Some(lon)) => {
            // Explicit coordinates act as a fresh fix and refresh the cache.
            let provider = LocationProvider::new(StaticPositionSource::new(lat, lon), store.clone())
                .with_request(PositionRequest {
                    high_accuracy: true,
                    timeout: Duration::from_secs(config.location_timeout_secs),
                    maximum_age: Duration::from_secs(config.location_max_age_secs),
                })
                .with_cache_ttl(Duration::from_secs(config.location_cache_ttl_secs));
            provider.current_position(true).await.map_err(|e| {
                tracing::error!(code = e.code(), error = %e, "location acquisition failed");
                anyhow::anyhow!("{}", e.user_message())
            })?
        }
        _ => match store.location() {
            Some(cached) => cached,
            None => bail!("no cached location found; pass --lat and --lon"),
        },
    };

    let client = OverpassClient::with_base_url(
        config.overpass_timeout_secs,
        &config.user_agent,
        &config.overpass_url,
    )
    .context("failed to build Overpass client")?;

    let mut finder = ParkFinder::new(client, store);
    let options = SearchOptions {
        radius_meters: radius_meters.unwrap_or(config.search_radius_meters),
        limit: limit.unwrap_or(config.search_limit),
    };

    let result = finder
        .find_nearby_parks(&location, options)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "park discovery failed");
            anyhow::anyhow!("{}", e.user_message())
        })?;

    if result.parks.is_empty() {
        println!(
            "No parks found within {} meters of {:.4}, {:.4}.",
            options.radius_meters, location.coordinates.latitude, location.coordinates.longitude
        );
        return Ok(());
    }

    for (index, park) in result.parks.iter().enumerate() {
        println!(
            "{:>2}. {} — {} ({})",
            index + 1,
            park.name,
            park.distance_display,
            park.category
        );
    }
    if result.from_cache {
        println!("(served from cache)");
    }
    Ok(())
}

fn location(store: &CacheStore, command: &LocationCommands) {
    match command {
        LocationCommands::Show => match store.location() {
            Some(location) => println!(
                "{:.4}, {:.4} (±{}m, acquired {})",
                location.coordinates.latitude,
                location.coordinates.longitude,
                location.accuracy_meters,
                location.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            None => println!("no cached location"),
        },
        LocationCommands::Clear => {
            store.clear_location();
            println!("cached location cleared");
        }
    }
}

fn theme(store: &CacheStore, command: &ThemeCommands) {
    match command {
        ThemeCommands::Show => match store.theme() {
            Some(theme) => println!("{theme}"),
            None => println!("no theme preference set"),
        },
        ThemeCommands::Set { theme } => {
            store.set_theme(*theme);
            println!("theme set to {theme}");
        }
    }
}
