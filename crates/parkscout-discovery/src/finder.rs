//! Discovery orchestration: cache-key quantization, TTL caching, ranking.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use parkscout_core::{Park, UserLocation};
use parkscout_overpass::OverpassClient;
use parkscout_store::{keys, CacheStore};

use crate::error::DiscoveryError;

pub const DEFAULT_RADIUS_METERS: u32 = 3000;
pub const DEFAULT_LIMIT: usize = 5;

/// How long a ranked result set stays valid for its coordinate bucket.
const PARKS_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Advisory only — not enforced as a hard gate. The coordinate-bucket cache
/// (5-minute TTL) and the location cache (1-hour TTL) already keep redundant
/// API calls down in practice.
// TODO: enforce as a hard cooldown if Overpass rate-limiting becomes an issue.
const MIN_QUERY_INTERVAL_SECS: i64 = 30;

/// Knobs for one discovery run.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub radius_meters: u32,
    /// Maximum number of parks returned (and cached).
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A ranked result set, flagged with how it was served.
#[derive(Debug, Clone, PartialEq)]
pub struct FindParksResult {
    /// Ascending by distance; ties keep provider order.
    pub parks: Vec<Park>,
    pub from_cache: bool,
}

/// Coordinates the discovery pipeline: cache lookup, provider query,
/// ranking, and write-back.
///
/// The last-successful-query instant is an instance field, so independent
/// finders (one per front-end, several in tests) never interfere.
pub struct ParkFinder {
    client: OverpassClient,
    store: CacheStore,
    last_query_at: Option<DateTime<Utc>>,
}

impl ParkFinder {
    pub fn new(client: OverpassClient, store: CacheStore) -> Self {
        Self {
            client,
            store,
            last_query_at: None,
        }
    }

    /// Finds parks near `location`, sorted closest-first and truncated to
    /// the configured limit.
    ///
    /// Requests landing in the same ~100m coordinate bucket within the cache
    /// TTL are served from the store without any network traffic. A cache
    /// miss queries the provider once; failures are terminal for this
    /// invocation — retry is a user action.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when the provider query fails. The cache
    /// is left untouched in that case.
    pub async fn find_nearby_parks(
        &mut self,
        location: &UserLocation,
        options: SearchOptions,
    ) -> Result<FindParksResult, DiscoveryError> {
        let key = cache_key(location, options.radius_meters);

        if let Some(mut parks) = self.store.get::<Vec<Park>>(&key) {
            let within_cooldown = self
                .last_query_at
                .is_some_and(|at| Utc::now() - at < TimeDelta::seconds(MIN_QUERY_INTERVAL_SECS));
            tracing::debug!(
                key = %key,
                parks = parks.len(),
                within_cooldown,
                "serving parks from cache"
            );
            parks.truncate(options.limit);
            return Ok(FindParksResult {
                parks,
                from_cache: true,
            });
        }

        let mut parks = self
            .client
            .search_nearby(location.coordinates, options.radius_meters)
            .await?;

        // Stable sort: equidistant parks keep the provider's order.
        parks.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        parks.truncate(options.limit);

        self.store.set(&key, &parks, Some(PARKS_CACHE_TTL));
        self.last_query_at = Some(Utc::now());
        tracing::debug!(key = %key, parks = parks.len(), "serving parks fresh from provider");

        Ok(FindParksResult {
            parks,
            from_cache: false,
        })
    }

    /// Instant of the last successful provider query by this finder.
    #[must_use]
    pub fn last_query_at(&self) -> Option<DateTime<Utc>> {
        self.last_query_at
    }
}

/// Derives the store key for a location/radius pair.
///
/// Latitude and longitude are quantized to three decimal places (~100m),
/// so GPS jitter between repeated requests maps onto one cache bucket.
fn cache_key(location: &UserLocation, radius_meters: u32) -> String {
    format!(
        "{}_{:.3}_{:.3}_{}",
        keys::PARKS_PREFIX,
        location.coordinates.latitude,
        location.coordinates.longitude,
        radius_meters
    )
}

#[cfg(test)]
#[path = "finder_test.rs"]
mod tests;
