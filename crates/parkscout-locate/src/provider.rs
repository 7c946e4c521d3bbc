//! Cache-first location acquisition.

use std::time::Duration;

use chrono::Utc;

use parkscout_core::{Coordinates, UserLocation};
use parkscout_store::{CacheStore, DEFAULT_LOCATION_TTL};

use crate::error::LocationError;
use crate::source::{PermissionState, PositionFault, PositionRequest, PositionSource};

/// Obtains the user's position, preferring the cached location over a fresh
/// device query.
///
/// A successful fresh acquisition is written back to the store with a fixed
/// TTL, so subsequent calls within that window skip the device entirely.
pub struct LocationProvider<S> {
    source: S,
    store: CacheStore,
    request: PositionRequest,
    cache_ttl: Duration,
}

impl<S: PositionSource> LocationProvider<S> {
    pub fn new(source: S, store: CacheStore) -> Self {
        Self {
            source,
            store,
            request: PositionRequest::default(),
            cache_ttl: DEFAULT_LOCATION_TTL,
        }
    }

    /// Overrides the default position request options.
    #[must_use]
    pub fn with_request(mut self, request: PositionRequest) -> Self {
        self.request = request;
        self
    }

    /// Overrides the TTL applied when persisting a fresh location.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Returns the current position, from cache when possible.
    ///
    /// With `force_refresh` false, a non-expired cached location is returned
    /// immediately without touching the device. Otherwise the source is
    /// queried; on success the location is cached and returned.
    ///
    /// # Errors
    ///
    /// Returns a classified [`LocationError`] when the source faults or
    /// reports an unusable fix.
    pub async fn current_position(
        &self,
        force_refresh: bool,
    ) -> Result<UserLocation, LocationError> {
        if !force_refresh {
            if let Some(cached) = self.store.location() {
                tracing::debug!(
                    lat = cached.coordinates.latitude,
                    lon = cached.coordinates.longitude,
                    "using cached location"
                );
                return Ok(cached);
            }
        }

        let fix = self
            .source
            .current_position(&self.request)
            .await
            .map_err(classify_fault)?;

        let coordinates = Coordinates::new(fix.latitude, fix.longitude)
            .map_err(|e| LocationError::Unavailable(format!("device reported an invalid fix: {e}")))?;
        let location = UserLocation::new(coordinates, fix.accuracy_meters, Utc::now())
            .map_err(|e| LocationError::Unavailable(format!("device reported an invalid fix: {e}")))?;

        self.store.set_location(&location, self.cache_ttl);
        tracing::debug!(
            lat = location.coordinates.latitude,
            lon = location.coordinates.longitude,
            accuracy_meters = location.accuracy_meters,
            "acquired fresh location"
        );
        Ok(location)
    }

    /// The cached position, if any. Never triggers an acquisition.
    #[must_use]
    pub fn cached_position(&self) -> Option<UserLocation> {
        self.store.location()
    }

    #[must_use]
    pub fn has_cached_location(&self) -> bool {
        self.store.location().is_some()
    }

    /// The platform permission state for location access. Never fails.
    pub async fn check_permission(&self) -> PermissionState {
        self.source.permission_state().await
    }
}

/// Maps a source fault onto the public error classification. An unsupported
/// platform counts as position-unavailable.
fn classify_fault(fault: PositionFault) -> LocationError {
    match fault {
        PositionFault::PermissionDenied(message) => LocationError::PermissionDenied(message),
        PositionFault::Unavailable(message) | PositionFault::Unsupported(message) => {
            LocationError::Unavailable(message)
        }
        PositionFault::TimedOut(message) => LocationError::TimedOut(message),
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
